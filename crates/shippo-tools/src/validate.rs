//! Argument checks run against a tool's input schema before anything is decoded or sent.

use crate::error::{ToolError, Violation};
use jsonschema::error::ValidationErrorKind;
use serde_json::Value;

/// Everything wrong with `args`, collected in one pass so the caller can fix it in one go.
pub(crate) fn validate_arguments(schema: &Value, args: &Value) -> Result<(), ToolError> {
    let mut violations = parameter_names(schema, args);
    violations.extend(value_constraints(schema, args));
    if violations.is_empty() {
        return Ok(());
    }
    Err(ToolError::Validation {
        message: summarize(&violations),
        violations,
    })
}

/// Misspelled or absent parameter names. Value problems are left to the schema pass.
fn parameter_names(schema: &Value, args: &Value) -> Vec<Violation> {
    let Some(given) = args.as_object() else {
        return Vec::new();
    };
    let accepted: Vec<&str> = schema
        .get("properties")
        .and_then(Value::as_object)
        .map(|props| props.keys().map(String::as_str).collect())
        .unwrap_or_default();

    let unknown = given
        .keys()
        .filter(|k| !accepted.contains(&k.as_str()))
        .map(|k| Violation::UnknownParameter {
            parameter: k.clone(),
            did_you_mean: closest_names(k, &accepted),
        });
    let missing = schema
        .get("required")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .filter(|r| !given.contains_key(*r))
        .map(|r| Violation::MissingParameter {
            parameter: r.to_string(),
        });
    unknown.chain(missing).collect()
}

/// Types, enums and bounds, reported against a dotted field path (`parcels.0.weight`).
fn value_constraints(schema: &Value, args: &Value) -> Vec<Violation> {
    let validator = match jsonschema::validator_for(schema) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "tool input schema does not compile");
            return Vec::new();
        }
    };
    validator
        .iter_errors(args)
        .filter(|e| !matches!(e.kind(), ValidationErrorKind::Required { .. }))
        .map(|e| Violation::InvalidValue {
            field: field_path(&e.instance_path().to_string()),
            message: e.to_string(),
        })
        .collect()
}

fn field_path(pointer: &str) -> String {
    match pointer.trim_start_matches('/') {
        "" => "arguments".to_string(),
        p => p.replace('/', "."),
    }
}

/// A typo wins the headline even when other problems exist; it is the likeliest fix.
fn summarize(violations: &[Violation]) -> String {
    let typo = violations.iter().find_map(|v| match v {
        Violation::UnknownParameter {
            parameter,
            did_you_mean,
        } => Some((parameter, did_you_mean.first())),
        _ => None,
    });
    let headline = match typo {
        Some((p, Some(s))) => format!("unknown parameter '{p}' (did you mean '{s}'?)"),
        Some((p, None)) => format!("unknown parameter '{p}'"),
        None => match &violations[0] {
            Violation::MissingParameter { parameter } => {
                format!("missing required parameter '{parameter}'")
            }
            Violation::InvalidValue { field, message } => format!("{field}: {message}"),
            Violation::UnknownParameter { parameter, .. } => format!("unknown parameter '{parameter}'"),
            Violation::Malformed { message } => message.clone(),
        },
    };
    match violations.len() {
        1 => format!("Invalid params: {headline}"),
        n => format!("Invalid params: {headline} (and {} more)", n - 1),
    }
}

/// Accepted names within typo distance of `unknown`, best match first.
pub(crate) fn closest_names(unknown: &str, known: &[&str]) -> Vec<String> {
    let mut scored: Vec<(f64, &str)> = known
        .iter()
        .map(|k| (strsim::jaro_winkler(unknown, k), *k))
        .filter(|(score, _)| *score > 0.75)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().map(|(_, k)| k.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::{closest_names, validate_arguments};
    use crate::error::{ToolError, Violation};
    use serde_json::{Value, json};

    fn schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "address_id": {"type": "string"},
                "results": {"type": ["integer", "null"], "minimum": 1, "maximum": 100},
                "format": {"type": "string", "enum": ["json", "markdown"]}
            },
            "required": ["address_id"]
        })
    }

    fn violations(args: &Value) -> (String, Vec<Violation>) {
        match validate_arguments(&schema(), args) {
            Err(ToolError::Validation {
                message,
                violations,
            }) => (message, violations),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_valid_arguments() {
        assert!(validate_arguments(&schema(), &json!({"address_id": "a", "results": 5})).is_ok());
    }

    #[test]
    fn unknown_parameter_gets_suggestion() {
        let (msg, v) = violations(&json!({"address_id": "a", "reslts": 5}));
        assert_eq!(
            msg,
            "Invalid params: unknown parameter 'reslts' (did you mean 'results'?)"
        );
        assert_eq!(
            v,
            vec![Violation::UnknownParameter {
                parameter: "reslts".into(),
                did_you_mean: vec!["results".into()],
            }]
        );
    }

    #[test]
    fn missing_required_is_reported_once() {
        let (msg, v) = violations(&json!({}));
        assert_eq!(msg, "Invalid params: missing required parameter 'address_id'");
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn bad_values_name_their_field() {
        let (msg, v) = violations(&json!({"address_id": "a", "results": 500, "format": "xml"}));
        assert_eq!(v.len(), 2);
        assert!(msg.ends_with("(and 1 more)"), "{msg}");
        let mut fields: Vec<&str> = v
            .iter()
            .filter_map(|x| match x {
                Violation::InvalidValue { field, .. } => Some(field.as_str()),
                _ => None,
            })
            .collect();
        fields.sort_unstable();
        assert_eq!(fields, ["format", "results"]);
    }

    #[test]
    fn closest_names_rank_best_first() {
        let s = closest_names("list_adresses", &["list_addresses", "list_parcels", "get_address"]);
        assert_eq!(s.first().map(String::as_str), Some("list_addresses"));
        assert!(closest_names("purchase_batch", &["get_rate"]).is_empty());
    }
}
