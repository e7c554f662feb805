//! Subset schema tables
//!
//! Each resource kind owns a fixed, ordered list of named subsets. A subset
//! is a list of fields selected from the response mapping; a field is either
//! a top-level key or a top-level key whose nested object is itself narrowed
//! to a child field list.

use crate::core::constants::endpoint;
use serde_json::{Map, Value};
use std::fmt;

/// A field selected by a subset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Copy the value under this key as is
    Key(&'static str),
    /// Copy the object under this key, keeping only the listed children
    Nested(&'static str, &'static [Field]),
}

impl Field {
    pub fn key(&self) -> &'static str {
        match self {
            Field::Key(key) | Field::Nested(key, _) => *key,
        }
    }
}

/// A named subset of a resource response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subset {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl Subset {
    /// Whether the subset selects `key` at the top level
    pub fn contains(&self, key: &str) -> bool {
        self.fields.iter().any(|field| field.key() == key)
    }

    /// Build the filtered view of `source`
    ///
    /// Keys outside the subset are never present in the result, and absent
    /// source keys are simply skipped.
    pub fn project(&self, source: &Map<String, Value>) -> Map<String, Value> {
        project_fields(self.fields, source)
    }
}

fn project_fields(fields: &[Field], source: &Map<String, Value>) -> Map<String, Value> {
    let mut view = Map::new();
    for field in fields {
        match field {
            Field::Key(key) => {
                if let Some(value) = source.get(*key) {
                    view.insert((*key).to_string(), value.clone());
                }
            }
            Field::Nested(key, children) => match source.get(*key) {
                Some(Value::Object(nested)) => {
                    view.insert(
                        (*key).to_string(),
                        Value::Object(project_fields(children, nested)),
                    );
                }
                Some(other) => {
                    view.insert((*key).to_string(), other.clone());
                }
                None => {}
            },
        }
    }
    view
}

pub mod plan {
    use super::{Field, Subset};

    pub const STATUS: Subset = Subset {
        name: "status",
        fields: &[
            Field::Key("coverage_status"),
            Field::Nested(
                "primary_insurance",
                &[
                    Field::Key("name"),
                    Field::Key("id"),
                    Field::Key("group_name"),
                    Field::Key("plan_type"),
                ],
            ),
        ],
    };

    pub const DEDUCTIBLE: Subset = Subset {
        name: "deductible",
        fields: &[
            Field::Key("deductible_in_network"),
            Field::Key("deductible_out_network"),
        ],
    };

    pub const BALANCE: Subset = Subset {
        name: "balance",
        fields: &[Field::Key("balance")],
    };

    pub const DATES: Subset = Subset {
        name: "dates",
        fields: &[
            Field::Key("plan_begins"),
            Field::Key("plan_ends"),
            Field::Nested(
                "primary_insurance",
                &[Field::Key("plan_begins"), Field::Key("plan_ends")],
            ),
        ],
    };

    pub const STOP_LOSS: Subset = Subset {
        name: "stop_loss",
        fields: &[
            Field::Key("stop_loss_in_network"),
            Field::Key("stop_loss_out_network"),
        ],
    };

    pub const ALL: &[Subset] = &[STATUS, DEDUCTIBLE, BALANCE, DATES, STOP_LOSS];
}

pub mod service {
    use super::{Field, Subset};

    pub const VISITS: Subset = Subset {
        name: "visits",
        fields: &[
            Field::Key("visits_in_network"),
            Field::Key("visits_out_network"),
        ],
    };

    pub const COPAYMENT: Subset = Subset {
        name: "copayment",
        fields: &[
            Field::Key("copayment_in_network"),
            Field::Key("copayment_out_network"),
        ],
    };

    pub const COINSURANCE: Subset = Subset {
        name: "coinsurance",
        fields: &[
            Field::Key("coinsurance_in_network"),
            Field::Key("coinsurance_out_network"),
        ],
    };

    pub const DEDUCTIBLE: Subset = Subset {
        name: "deductible",
        fields: &[
            Field::Key("deductible_in_network"),
            Field::Key("deductible_out_network"),
        ],
    };

    pub const ALL: &[Subset] = &[VISITS, COPAYMENT, COINSURANCE, DEDUCTIBLE];
}

pub mod demographic {
    use super::{Field, Subset};

    pub const ZIP: Subset = Subset {
        name: "zip",
        fields: &[Field::Key("zip")],
    };

    pub const EMPLOYER: Subset = Subset {
        name: "employer",
        fields: &[
            Field::Key("group_id"),
            Field::Key("group_name"),
            Field::Key("employer"),
        ],
    };

    pub const ADDRESS: Subset = Subset {
        name: "address",
        fields: &[Field::Key("address"), Field::Key("city"), Field::Key("state")],
    };

    pub const DOB: Subset = Subset {
        name: "dob",
        fields: &[Field::Key("dob")],
    };

    pub const ALL: &[Subset] = &[ZIP, EMPLOYER, ADDRESS, DOB];
}

pub mod claim {
    use super::{Field, Subset};

    pub const STATUS: Subset = Subset {
        name: "status",
        fields: &[
            Field::Key("claim_status"),
            Field::Key("claim_number"),
            Field::Key("status_effective_date"),
            Field::Key("total_charge_amount"),
            Field::Key("paid_amount"),
        ],
    };

    pub const ALL: &[Subset] = &[STATUS];
}

/// The resource kinds served by the Eligible API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Plan,
    Service,
    Demographic,
    Claim,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Plan,
        ResourceKind::Service,
        ResourceKind::Demographic,
        ResourceKind::Claim,
    ];

    /// Endpoint path relative to the base URL
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Plan => endpoint::PLAN,
            ResourceKind::Service => endpoint::SERVICE,
            ResourceKind::Demographic => endpoint::DEMOGRAPHIC,
            ResourceKind::Claim => endpoint::CLAIM,
        }
    }

    /// Subsets defined for this resource, in declaration order
    pub fn subsets(&self) -> &'static [Subset] {
        match self {
            ResourceKind::Plan => plan::ALL,
            ResourceKind::Service => service::ALL,
            ResourceKind::Demographic => demographic::ALL,
            ResourceKind::Claim => claim::ALL,
        }
    }

    /// Look up a subset by name
    pub fn subset(&self, name: &str) -> Option<&'static Subset> {
        self.subsets().iter().find(|subset| subset.name == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ResourceKind::Plan => "plan",
            ResourceKind::Service => "service",
            ResourceKind::Demographic => "demographic",
            ResourceKind::Claim => "claim",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn check_unique(fields: &[Field], context: &str) {
        let mut seen = HashSet::new();
        for field in fields {
            assert!(seen.insert(field.key()), "duplicate field {} in {}", field.key(), context);
            if let Field::Nested(key, children) = field {
                assert!(!children.is_empty(), "empty nested list {} in {}", key, context);
                check_unique(children, context);
            }
        }
    }

    #[test]
    fn test_schema_tables_are_well_formed() {
        for kind in ResourceKind::ALL {
            let subsets = kind.subsets();
            assert!(!subsets.is_empty());

            let mut names = HashSet::new();
            for subset in subsets {
                assert!(names.insert(subset.name), "duplicate subset {} on {}", subset.name, kind);
                assert!(!subset.fields.is_empty());
                check_unique(subset.fields, subset.name);
            }
        }
    }

    #[test]
    fn test_paths_are_distinct() {
        let paths: HashSet<_> = ResourceKind::ALL.iter().map(|kind| kind.path()).collect();
        assert_eq!(paths.len(), ResourceKind::ALL.len());
    }

    #[test]
    fn test_subset_lookup() {
        assert_eq!(ResourceKind::Plan.subset("stop_loss"), Some(&plan::STOP_LOSS));
        assert_eq!(ResourceKind::Claim.subset("dob"), None);
    }

    #[test]
    fn test_project_keeps_only_listed_keys() {
        let source = as_map(json!({
            "deductible_in_network": 500,
            "balance": 200,
            "coverage_status": "Active"
        }));
        let view = plan::DEDUCTIBLE.project(&source);
        assert_eq!(view.len(), 1);
        assert_eq!(view["deductible_in_network"], json!(500));
        assert!(view.get("balance").is_none());
    }

    #[test]
    fn test_project_narrows_nested_objects() {
        let source = as_map(json!({
            "primary_insurance": {
                "name": "Aetna",
                "plan_begins": "2024-01-01",
                "plan_ends": "2024-12-31"
            }
        }));

        let dates = plan::DATES.project(&source);
        assert_eq!(
            dates["primary_insurance"],
            json!({"plan_begins": "2024-01-01", "plan_ends": "2024-12-31"})
        );

        let status = plan::STATUS.project(&source);
        assert_eq!(status["primary_insurance"], json!({"name": "Aetna"}));
    }

    #[test]
    fn test_project_nested_non_object_is_copied() {
        let source = as_map(json!({ "primary_insurance": null }));
        let view = plan::DATES.project(&source);
        assert_eq!(view["primary_insurance"], Value::Null);
    }
}
