//! Relation module - the edge vocabulary and how each tag is classified

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Type of relation carried by an edge
///
/// The known vocabulary is closed; anything else is kept verbatim in
/// [`Relation::Other`] so that parsing never fails and the original tag
/// survives a round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Relation {
    /// Evidence for the target
    Supports,
    /// Formal proof of the target
    Proves,
    /// Logical entailment of the target
    Entails,
    /// The source predicts the target
    Predicts,
    /// Counterargument against the target
    Attacks,
    /// Refutation of the target
    Refutes,
    /// The source explains the target
    Explains,
    /// The source defines a term used by the target
    Defines,
    /// Citation
    Cites,
    /// The source formalizes the target in another domain
    Formalizes,
    /// The source models the target
    Models,
    /// Philosophical grounding of a formal result
    PhilosophicalFoundation,
    /// The endpoints state the same thing
    Equivalent,
    /// Any tag outside the known vocabulary
    Other(String),
}

/// Class of a relation, deciding which computations an edge takes part in
///
/// | class | path search | tension |
/// |---|---|---|
/// | `Deductive` | yes | support |
/// | `Supporting` | yes | support |
/// | `Predictive` | yes | - |
/// | `Attacking` | - | attack |
/// | `Unclassified` | - | - |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationClass {
    /// proves, entails
    Deductive,
    /// supports
    Supporting,
    /// predicts
    Predictive,
    /// attacks, refutes
    Attacking,
    /// Everything else, including unknown tags
    Unclassified,
}

impl Relation {
    /// Get the relation tag as it appears in the edge store
    pub fn as_str(&self) -> &str {
        match self {
            Relation::Supports => "supports",
            Relation::Proves => "proves",
            Relation::Entails => "entails",
            Relation::Predicts => "predicts",
            Relation::Attacks => "attacks",
            Relation::Refutes => "refutes",
            Relation::Explains => "explains",
            Relation::Defines => "defines",
            Relation::Cites => "cites",
            Relation::Formalizes => "formalizes",
            Relation::Models => "models",
            Relation::PhilosophicalFoundation => "philosophical_foundation",
            Relation::Equivalent => "equivalent",
            Relation::Other(tag) => tag,
        }
    }

    /// Parse a relation tag. Matching is exact; unknown tags become `Other`.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "supports" => Relation::Supports,
            "proves" => Relation::Proves,
            "entails" => Relation::Entails,
            "predicts" => Relation::Predicts,
            "attacks" => Relation::Attacks,
            "refutes" => Relation::Refutes,
            "explains" => Relation::Explains,
            "defines" => Relation::Defines,
            "cites" => Relation::Cites,
            "formalizes" => Relation::Formalizes,
            "models" => Relation::Models,
            "philosophical_foundation" => Relation::PhilosophicalFoundation,
            "equivalent" => Relation::Equivalent,
            other => Relation::Other(other.to_string()),
        }
    }

    /// Get the class of this relation
    pub fn class(&self) -> RelationClass {
        match self {
            Relation::Proves | Relation::Entails => RelationClass::Deductive,
            Relation::Supports => RelationClass::Supporting,
            Relation::Predicts => RelationClass::Predictive,
            Relation::Attacks | Relation::Refutes => RelationClass::Attacking,
            Relation::Explains
            | Relation::Defines
            | Relation::Cites
            | Relation::Formalizes
            | Relation::Models
            | Relation::PhilosophicalFoundation
            | Relation::Equivalent
            | Relation::Other(_) => RelationClass::Unclassified,
        }
    }

    /// Usable for justification paths (supports, proves, entails, predicts)
    pub fn is_epistemic(&self) -> bool {
        self.class().is_epistemic()
    }

    /// proves or entails
    pub fn is_deductive(&self) -> bool {
        self.class() == RelationClass::Deductive
    }

    /// Counts toward the support pole of tension (supports, proves, entails)
    pub fn is_support(&self) -> bool {
        matches!(
            self.class(),
            RelationClass::Deductive | RelationClass::Supporting
        )
    }

    /// Counts toward the attack pole of tension (attacks, refutes)
    pub fn is_attack(&self) -> bool {
        self.class() == RelationClass::Attacking
    }
}

impl RelationClass {
    /// Deductive, supporting and predictive relations justify their target
    pub fn is_epistemic(&self) -> bool {
        matches!(
            self,
            RelationClass::Deductive | RelationClass::Supporting | RelationClass::Predictive
        )
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relation {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Relation::parse(s))
    }
}

impl From<String> for Relation {
    fn from(tag: String) -> Self {
        match Relation::parse(&tag) {
            Relation::Other(_) => Relation::Other(tag),
            known => known,
        }
    }
}

impl From<&str> for Relation {
    fn from(tag: &str) -> Self {
        Relation::parse(tag)
    }
}

impl From<Relation> for String {
    fn from(relation: Relation) -> Self {
        match relation {
            Relation::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epistemic_relations() {
        for tag in ["supports", "proves", "entails", "predicts"] {
            assert!(Relation::parse(tag).is_epistemic(), "{tag} should be epistemic");
        }
        for tag in ["attacks", "refutes", "defines", "cites", "equivalent", "formalizes"] {
            assert!(!Relation::parse(tag).is_epistemic(), "{tag} should not be epistemic");
        }
    }

    #[test]
    fn test_deductive_subset() {
        assert!(Relation::Proves.is_deductive());
        assert!(Relation::Entails.is_deductive());
        assert!(!Relation::Supports.is_deductive());
        assert!(!Relation::Predicts.is_deductive());
    }

    #[test]
    fn test_support_excludes_predicts() {
        assert!(Relation::Supports.is_support());
        assert!(Relation::Proves.is_support());
        assert!(Relation::Entails.is_support());
        assert!(!Relation::Predicts.is_support());
    }

    #[test]
    fn test_attack_relations() {
        assert!(Relation::Attacks.is_attack());
        assert!(Relation::Refutes.is_attack());
        assert!(!Relation::Supports.is_attack());
        assert!(!Relation::Attacks.is_epistemic());
    }

    #[test]
    fn test_unknown_tag_is_unclassified() {
        let relation = Relation::parse("inspired_by");
        assert_eq!(relation, Relation::Other("inspired_by".to_string()));
        assert_eq!(relation.class(), RelationClass::Unclassified);
        assert_eq!(relation.as_str(), "inspired_by");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            Relation::parse("Supports"),
            Relation::Other("Supports".to_string())
        );
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&Relation::PhilosophicalFoundation).unwrap();
        assert_eq!(json, "\"philosophical_foundation\"");

        let relation: Relation = serde_json::from_str("\"refutes\"").unwrap();
        assert_eq!(relation, Relation::Refutes);
    }
}
