//! Closed stereotype vocabularies.
//!
//! Stereotype literals are case-sensitive. A lexeme that is not in one of
//! these sets never becomes a stereotype token, so downstream code can match
//! exhaustively.

use std::fmt;

macro_rules! stereotype_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $text:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant, in vocabulary order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The canonical source spelling.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            /// Exact, case-sensitive lookup.
            pub fn from_keyword(text: &str) -> Option<Self> {
                match text {
                    $($text $(| $alias)* => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

stereotype_enum! {
    /// Foundational class stereotypes.
    pub enum ClassStereotype {
        Kind => "kind",
        Subkind => "subkind",
        Collective => "collective",
        Quantity => "quantity",
        Quality => "quality",
        Mode => "mode",
        IntrinsicMode => "intrinsicMode" | "intrisicMode",
        ExtrinsicMode => "extrinsicMode",
        Role => "role",
        Phase => "phase",
        HistoricalRole => "historicalRole",
        Event => "event",
        Situation => "situation",
        Process => "process",
        Category => "category",
        Mixin => "mixin",
        PhaseMixin => "phaseMixin",
        RoleMixin => "roleMixin",
        HistoricalRoleMixin => "historicalRoleMixin",
        Relator => "relator",
    }
}

stereotype_enum! {
    /// Relation stereotypes.
    pub enum RelationStereotype {
        Material => "material",
        Derivation => "derivation",
        Comparative => "comparative",
        Mediation => "mediation",
        Characterization => "characterization",
        ExternalDependence => "externalDependence",
        ComponentOf => "componentOf",
        MemberOf => "memberOf",
        SubCollectionOf => "subCollectionOf",
        SubQualityOf => "subQualityOf",
        Instantiation => "instantiation",
        Termination => "termination",
        Participational => "participational",
        Participation => "participation",
        HistoricalDependence => "historicalDependence",
        Creation => "creation",
        Manifestation => "manifestation",
        BringsAbout => "bringsAbout",
        Triggers => "triggers",
        Composition => "composition",
        Aggregation => "aggregation",
        Inherence => "inherence",
        Value => "value",
        Formal => "formal",
        Constitution => "constitution",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_stereotype_is_case_sensitive() {
        assert_eq!(ClassStereotype::from_keyword("kind"), Some(ClassStereotype::Kind));
        assert_eq!(ClassStereotype::from_keyword("Kind"), None);
        assert_eq!(
            ClassStereotype::from_keyword("roleMixin"),
            Some(ClassStereotype::RoleMixin)
        );
        assert_eq!(ClassStereotype::from_keyword("rolemixin"), None);
    }

    #[test]
    fn test_intrinsic_mode_alias() {
        assert_eq!(
            ClassStereotype::from_keyword("intrisicMode"),
            Some(ClassStereotype::IntrinsicMode)
        );
        assert_eq!(ClassStereotype::IntrinsicMode.as_str(), "intrinsicMode");
    }

    #[test]
    fn test_round_trip_spelling() {
        for stereotype in RelationStereotype::ALL {
            assert_eq!(
                RelationStereotype::from_keyword(stereotype.as_str()),
                Some(*stereotype)
            );
        }
        assert_eq!(ClassStereotype::ALL.len(), 20);
        assert_eq!(RelationStereotype::ALL.len(), 25);
    }
}
