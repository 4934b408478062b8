use serde::{Deserialize, Serialize};

/// Environmental condition attached to a compartment (temperature, pH, water
/// activity). The value may be intentionally absent for a symbolic variable
/// with no fixed level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelVariable {
    pub name: String,
    pub value: Option<f64>,
}

impl ModelVariable {
    pub fn new(name: impl Into<String>, value: Option<f64>) -> Self {
        ModelVariable {
            name: name.into(),
            value,
        }
    }
}

/// Pairwise correlation between a coefficient and another named parameter.
/// Same optionality rule as [`ModelVariable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    pub name: String,
    pub value: Option<f64>,
}

impl Correlation {
    pub fn new(name: impl Into<String>, value: Option<f64>) -> Self {
        Correlation {
            name: name.into(),
            value,
        }
    }
}

/// Extension metadata for a host compartment element: the source code of the
/// food matrix, a free-text detail and the environmental conditions.
///
/// Attached to the host element only when at least one field is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompartmentExtension {
    /// PMF source code identifying the food matrix
    pub pmf_code: Option<String>,

    /// Free-text matrix detail
    pub detail: Option<String>,

    /// Environmental conditions, in document order
    pub model_variables: Vec<ModelVariable>,
}

impl CompartmentExtension {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.pmf_code.is_none() && self.detail.is_none() && self.model_variables.is_empty()
    }
}

/// Extension metadata for a host species element.
///
/// Attached to the host element only when at least one field is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeciesExtension {
    /// Combase/source code identifying the organism
    pub source_code: Option<String>,

    /// Free-text organism detail
    pub detail: Option<String>,

    /// Description of the dependent variable
    pub description: Option<String>,
}

impl SpeciesExtension {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Statistical extension metadata for a host coefficient (parameter) element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoefficientExtension {
    /// Statistical significance
    pub p: Option<f64>,

    /// Standard error
    pub error: Option<f64>,

    /// t statistic
    pub t: Option<f64>,

    /// Correlations with other parameters, in document order
    pub correlations: Vec<Correlation>,

    /// Free-text description
    pub description: Option<String>,

    /// Marks the coefficient as a start value. Structural flag, not data:
    /// an absent tag decodes to `false`.
    pub is_start: bool,
}

impl CoefficientExtension {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Subject class of a model rule, describing what the formula models.
///
/// Tokens follow the predictive-microbiology literature (`growth`,
/// `growth/inactivation`, `T/pH/aw`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelClass {
    Unknown,
    Growth,
    Inactivation,
    Survival,
    GrowthInactivation,
    InactivationSurvival,
    GrowthSurvival,
    GrowthInactivationSurvival,
    T,
    Ph,
    Aw,
    TPh,
    TAw,
    PhAw,
    TPhAw,
}

impl ModelClass {
    /// The serialized token for this class
    pub fn token(&self) -> &'static str {
        match self {
            ModelClass::Unknown => "unknown",
            ModelClass::Growth => "growth",
            ModelClass::Inactivation => "inactivation",
            ModelClass::Survival => "survival",
            ModelClass::GrowthInactivation => "growth/inactivation",
            ModelClass::InactivationSurvival => "inactivation/survival",
            ModelClass::GrowthSurvival => "growth/survival",
            ModelClass::GrowthInactivationSurvival => "growth/inactivation/survival",
            ModelClass::T => "T",
            ModelClass::Ph => "pH",
            ModelClass::Aw => "aw",
            ModelClass::TPh => "T/pH",
            ModelClass::TAw => "T/aw",
            ModelClass::PhAw => "pH/aw",
            ModelClass::TPhAw => "T/pH/aw",
        }
    }

    /// Inverse of [`ModelClass::token`]; `None` for unrecognized tokens
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "unknown" => Some(ModelClass::Unknown),
            "growth" => Some(ModelClass::Growth),
            "inactivation" => Some(ModelClass::Inactivation),
            "survival" => Some(ModelClass::Survival),
            "growth/inactivation" => Some(ModelClass::GrowthInactivation),
            "inactivation/survival" => Some(ModelClass::InactivationSurvival),
            "growth/survival" => Some(ModelClass::GrowthSurvival),
            "growth/inactivation/survival" => Some(ModelClass::GrowthInactivationSurvival),
            "T" => Some(ModelClass::T),
            "pH" => Some(ModelClass::Ph),
            "aw" => Some(ModelClass::Aw),
            "T/pH" => Some(ModelClass::TPh),
            "T/aw" => Some(ModelClass::TAw),
            "pH/aw" => Some(ModelClass::PhAw),
            "T/pH/aw" => Some(ModelClass::TPhAw),
            _ => None,
        }
    }
}

/// Extension metadata for a host model rule: the formula's name, subject
/// class, curation id and supporting literature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleExtension {
    /// Name of the formula; the one mandatory field
    pub formula_name: String,

    /// Subject class of the formula
    pub model_class: Option<ModelClass>,

    /// Identifier of the formula in the curation database
    pub pmmlab_id: Option<i32>,

    /// Literature references, in document order
    pub references: Vec<super::Reference>,
}

impl RuleExtension {
    pub fn new(formula_name: impl Into<String>) -> Self {
        RuleExtension {
            formula_name: formula_name.into(),
            model_class: None,
            pmmlab_id: None,
            references: Vec::new(),
        }
    }
}
