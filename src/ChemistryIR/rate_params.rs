//! Rate parameter payloads carried by solver processes.
//!
//! Each rate model gets its own small struct, and [`RateParameters`] is the
//! closed set of them. The [`RateLaw`] trait is dispatched over the enum so
//! callers can ask any process for its kind tag, label and a printable
//! parameter summary without matching on the model themselves.
#![allow(non_snake_case)]

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

use crate::Mechanisms::species::Species;

#[enum_dispatch]
pub trait RateLaw {
    /// Upper-case tag of the rate model, e.g. "TROE".
    fn kind(&self) -> &'static str;
    /// Solver-visible label: the namespaced rate name for externally
    /// supplied rates, the model tag for everything else.
    fn label(&self) -> String;
    /// One-line parameter summary for console tables and logs.
    fn summary(&self) -> String;
}

/// k = A · exp(−C/T) · (T/D)^B · (1 + E·P), molar basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrheniusRateParameters {
    pub A: f64,
    pub B: f64,
    pub C: f64,
    pub D: f64,
    pub E: f64,
}

impl RateLaw for ArrheniusRateParameters {
    fn kind(&self) -> &'static str {
        "ARRHENIUS"
    }

    fn label(&self) -> String {
        self.kind().to_string()
    }

    fn summary(&self) -> String {
        format!(
            "A={:.4e} B={} C={} D={} E={}",
            self.A, self.B, self.C, self.D, self.E
        )
    }
}

/// Which channel of a branched reaction a process implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Branch {
    Alkoxy,
    Nitrate,
}

/// Wennberg branching rate. The two processes emitted for one branched
/// reaction share these numbers and differ only in `branch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchedRateParameters {
    pub X: f64,
    pub Y: f64,
    pub a0: f64,
    pub n: f64,
    pub branch: Branch,
}

impl RateLaw for BranchedRateParameters {
    fn kind(&self) -> &'static str {
        "BRANCHED"
    }

    fn label(&self) -> String {
        match self.branch {
            Branch::Alkoxy => "BRANCHED (alkoxy)".to_string(),
            Branch::Nitrate => "BRANCHED (nitrate)".to_string(),
        }
    }

    fn summary(&self) -> String {
        format!(
            "X={:.4e} Y={} a0={} n={}",
            self.X, self.Y, self.a0, self.n
        )
    }
}

/// Surface uptake rate. Carries the full gas-phase species record because
/// the rate depends on its molecular weight and diffusion coefficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRateParameters {
    pub reaction_probability: f64,
    pub species: Species,
}

impl RateLaw for SurfaceRateParameters {
    fn kind(&self) -> &'static str {
        "SURFACE"
    }

    fn label(&self) -> String {
        self.kind().to_string()
    }

    fn summary(&self) -> String {
        format!(
            "gamma={} species={}",
            self.reaction_probability, self.species.name
        )
    }
}

/// Troe falloff rate, molar basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TroeRateParameters {
    pub k0_A: f64,
    pub k0_B: f64,
    pub k0_C: f64,
    pub kinf_A: f64,
    pub kinf_B: f64,
    pub kinf_C: f64,
    pub Fc: f64,
    pub N: f64,
}

impl RateLaw for TroeRateParameters {
    fn kind(&self) -> &'static str {
        "TROE"
    }

    fn label(&self) -> String {
        self.kind().to_string()
    }

    fn summary(&self) -> String {
        format!(
            "k0_A={:.4e} kinf_A={:.4e} Fc={} N={}",
            self.k0_A, self.kinf_A, self.Fc, self.N
        )
    }
}

/// Chemical activation falloff rate, molar basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TernaryChemicalActivationRateParameters {
    pub k0_A: f64,
    pub k0_B: f64,
    pub k0_C: f64,
    pub kinf_A: f64,
    pub kinf_B: f64,
    pub kinf_C: f64,
    pub Fc: f64,
    pub N: f64,
}

impl RateLaw for TernaryChemicalActivationRateParameters {
    fn kind(&self) -> &'static str {
        "TERNARY_CHEMICAL_ACTIVATION"
    }

    fn label(&self) -> String {
        self.kind().to_string()
    }

    fn summary(&self) -> String {
        format!(
            "k0_A={:.4e} kinf_A={:.4e} Fc={} N={}",
            self.k0_A, self.kinf_A, self.Fc, self.N
        )
    }
}

/// Wigner tunneling rate, molar basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TunnelingRateParameters {
    pub A: f64,
    pub B: f64,
    pub C: f64,
}

impl RateLaw for TunnelingRateParameters {
    fn kind(&self) -> &'static str {
        "TUNNELING"
    }

    fn label(&self) -> String {
        self.kind().to_string()
    }

    fn summary(&self) -> String {
        format!("A={:.4e} B={} C={}", self.A, self.B, self.C)
    }
}

/// Rate supplied by the host at run time, found through its label.
/// Photolysis, emission, first-order loss and user-defined reactions all
/// lower to this with different label namespaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDefinedRateParameters {
    pub label: String,
    pub scaling_factor: f64,
}

impl RateLaw for UserDefinedRateParameters {
    fn kind(&self) -> &'static str {
        "USER_DEFINED"
    }

    fn label(&self) -> String {
        self.label.clone()
    }

    fn summary(&self) -> String {
        format!("label={} scaling={}", self.label, self.scaling_factor)
    }
}

/// The closed set of rate models a process can carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[enum_dispatch(RateLaw)]
pub enum RateParameters {
    Arrhenius(ArrheniusRateParameters),
    Branched(BranchedRateParameters),
    Surface(SurfaceRateParameters),
    Troe(TroeRateParameters),
    TernaryChemicalActivation(TernaryChemicalActivationRateParameters),
    Tunneling(TunnelingRateParameters),
    UserDefined(UserDefinedRateParameters),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags_via_enum_dispatch() {
        let arrhenius = RateParameters::Arrhenius(ArrheniusRateParameters {
            A: 1.0,
            B: 0.0,
            C: 0.0,
            D: 300.0,
            E: 0.0,
        });
        assert_eq!(arrhenius.kind(), "ARRHENIUS");
        assert_eq!(arrhenius.label(), "ARRHENIUS");

        let user = RateParameters::UserDefined(UserDefinedRateParameters {
            label: "PHOTO.jNO2".to_string(),
            scaling_factor: 1.0,
        });
        assert_eq!(user.kind(), "USER_DEFINED");
        assert_eq!(user.label(), "PHOTO.jNO2");
    }

    #[test]
    fn test_branch_labels_differ() {
        let base = BranchedRateParameters {
            X: 1.2e-11,
            Y: 167.0,
            a0: 0.423,
            n: 6.0,
            branch: Branch::Alkoxy,
        };
        let nitrate = BranchedRateParameters {
            branch: Branch::Nitrate,
            ..base.clone()
        };
        assert_ne!(base.label(), nitrate.label());
        assert_eq!(base.summary(), nitrate.summary());
    }

    #[test]
    fn test_summaries_mention_leading_parameters() {
        let troe = TroeRateParameters {
            k0_A: 1.0e-30,
            k0_B: 0.0,
            k0_C: 0.0,
            kinf_A: 1.0e-10,
            kinf_B: 0.0,
            kinf_C: 0.0,
            Fc: 0.6,
            N: 1.0,
        };
        let text = troe.summary();
        assert!(text.contains("k0_A="));
        assert!(text.contains("Fc=0.6"));
    }
}
