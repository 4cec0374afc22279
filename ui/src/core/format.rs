//! Formatting helpers for counter labels.

pub fn format_increment(step: i64) -> String {
    format!("+{step}")
}

pub fn format_decrement(step: i64) -> String {
    format!("-{step}")
}

/// Text shown in a limit field; empty when the limit is unset.
pub fn format_limit(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_labels_carry_sign() {
        assert_eq!(format_increment(5), "+5");
        assert_eq!(format_decrement(2), "-2");
    }

    #[test]
    fn unset_limit_is_blank() {
        assert_eq!(format_limit(None), "");
        assert_eq!(format_limit(Some(-3)), "-3");
    }
}
