use super::config::ScoringConfig;

fn check_non_negative(errors: &mut Vec<String>, field: &str, value: f64) {
    if !value.is_finite() || value < 0.0 {
        errors.push(format!("scoring.{}: must be a non-negative number", field));
    }
}

fn check_positive(errors: &mut Vec<String>, field: &str, value: f64) {
    if !value.is_finite() || value <= 0.0 {
        errors.push(format!("scoring.{}: must be greater than zero", field));
    }
}

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(board) = config.board {
        check_non_negative(&mut errors, "board.target_size", board.target_size);
        check_non_negative(&mut errors, "board.penalty_per_seat", board.penalty_per_seat);
    }

    if let Some(weights) = config.compliance {
        let fields = [
            ("ethics_code", weights.ethics_code),
            ("anti_corruption", weights.anti_corruption),
            ("whistleblowing", weights.whistleblowing),
            ("zero_incidents", weights.zero_incidents),
            ("supplier_code", weights.supplier_code),
            ("ifrs_alignment", weights.ifrs_alignment),
        ];
        for (name, value) in fields {
            check_non_negative(&mut errors, &format!("compliance.{}", name), value);
        }
        if weights.total() <= 0.0 {
            errors.push("scoring.compliance: at least one weight must be positive".to_string());
        }
    }

    if let Some(csr) = config.csr {
        check_positive(&mut errors, "csr.education_per", csr.education_per);
        check_positive(&mut errors, "csr.hospital_per", csr.hospital_per);
        check_non_negative(&mut errors, "csr.education_points", csr.education_points);
        check_non_negative(&mut errors, "csr.hospital_points", csr.hospital_points);
        check_non_negative(&mut errors, "csr.term_cap", csr.term_cap);
        check_non_negative(&mut errors, "csr.trend_bonus", csr.trend_bonus);
        check_non_negative(&mut errors, "csr.score_cap", csr.score_cap);
    }

    if let Some(weights) = config.disclosure {
        check_non_negative(
            &mut errors,
            "disclosure.full_remuneration_disclosure",
            weights.full_remuneration_disclosure,
        );
        check_non_negative(&mut errors, "disclosure.esg_linked_pay", weights.esg_linked_pay);
        check_non_negative(&mut errors, "disclosure.ifrs_alignment", weights.ifrs_alignment);
    }

    if let Some(value) = config.committee_effectiveness {
        if !(0.0..=100.0).contains(&value) {
            errors.push("scoring.committee_effectiveness: must be between 0 and 100".to_string());
        }
    }

    if let Some(grades) = config.grades {
        let bounds = [("a", grades.a), ("b", grades.b), ("c", grades.c), ("d", grades.d)];
        for (name, value) in bounds {
            if !(0.0..=100.0).contains(&value) {
                errors.push(format!("scoring.grades.{}: must be between 0 and 100", name));
            }
        }
        if !(grades.a > grades.b && grades.b > grades.c && grades.c > grades.d) {
            errors.push("scoring.grades: thresholds must strictly decrease from a to d".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
