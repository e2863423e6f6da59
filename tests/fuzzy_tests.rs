#[cfg(test)]
mod tests {
    use autopark::fuzzy::{
        Condition, FuzzyError, FuzzyModel, LinguisticVariable, MembershipFunction, Rule, Universe,
        VelocityModel, VelocityProfile,
    };
    use rstest::rstest;

    // The tuning used by several properties below: stop/break knees at
    // 1.5 / 2.0, peak velocity 10 with the knee at 5.
    fn reference_profile() -> VelocityProfile {
        VelocityProfile {
            max_velocity: 10.0,
            break_velocity: 5.0,
            stop_distance: 1.5,
            break_distance: 2.0,
            sharpness: 0.2,
            snap_epsilon: 0.2,
        }
    }

    fn two_region_model(rules: Vec<Rule>) -> Result<FuzzyModel, FuzzyError> {
        let mut dist = LinguisticVariable::new("dist", Universe::linspace(0.0, 6.0, 601))?;
        dist.add_term("near", MembershipFunction::trapezoid(0.0, 0.0, 1.0, 2.0)?)?;
        dist.add_term("far", MembershipFunction::trapezoid(1.0, 2.0, 6.0, 6.0)?)?;
        let mut vel = LinguisticVariable::new("vel", Universe::linspace(-2.0, 8.0, 601))?;
        vel.add_term("slow", MembershipFunction::triangle(-2.0, 0.0, 2.0)?)?;
        vel.add_term("fast", MembershipFunction::triangle(2.0, 5.0, 8.0)?)?;
        FuzzyModel::new(vec![dist], vel, rules)
    }

    #[rstest]
    #[case(0.5, 0.0)] // left of the foot
    #[case(1.0, 0.0)] // on the left foot
    #[case(1.5, 0.5)] // halfway up
    #[case(2.0, 1.0)] // peak
    #[case(2.5, 0.5)] // halfway down
    #[case(3.5, 0.0)] // right of the foot
    fn triangle_degrees(#[case] x: f64, #[case] expected: f64) {
        let mf = MembershipFunction::triangle(1.0, 2.0, 3.0).unwrap();
        assert!((mf.degree(x) - expected).abs() < 1e-12);
    }

    #[rstest]
    #[case(0.5, 0.5)]
    #[case(1.0, 1.0)] // flat top
    #[case(2.0, 1.0)] // flat top
    #[case(2.5, 0.5)]
    #[case(4.0, 0.0)]
    fn trapezoid_degrees(#[case] x: f64, #[case] expected: f64) {
        let mf = MembershipFunction::trapezoid(0.0, 1.0, 2.0, 3.0).unwrap();
        assert!((mf.degree(x) - expected).abs() < 1e-12);
    }

    // Coincident control points are legal and denote a vertical edge.
    #[test]
    fn degenerate_vertical_edges() {
        let left_shoulder = MembershipFunction::trapezoid(0.0, 0.0, 1.0, 2.0).unwrap();
        assert_eq!(left_shoulder.degree(0.0), 1.0);
        assert_eq!(left_shoulder.degree(-0.1), 0.0);

        let spike = MembershipFunction::triangle(1.0, 1.0, 1.0).unwrap();
        assert_eq!(spike.degree(1.0), 1.0);
        assert_eq!(spike.degree(1.0001), 0.0);
    }

    #[test]
    fn non_monotonic_points_rejected() {
        assert!(matches!(
            MembershipFunction::triangle(2.0, 1.0, 3.0),
            Err(FuzzyError::NonMonotonic { .. })
        ));
        assert!(matches!(
            MembershipFunction::trapezoid(0.0, 1.0, 0.5, 2.0),
            Err(FuzzyError::NonMonotonic { .. })
        ));
    }

    // Malformed rule bases fail at construction, never at inference.
    #[test]
    fn undefined_label_rejected_at_construction() {
        let result = two_region_model(vec![Rule::simple("dist", "bogus", "slow")]);
        assert!(matches!(
            result,
            Err(FuzzyError::UndefinedLabel { ref label, .. }) if label == "bogus"
        ));
    }

    #[test]
    fn undefined_variable_rejected_at_construction() {
        let result = two_region_model(vec![Rule::simple("speed", "near", "slow")]);
        assert!(matches!(result, Err(FuzzyError::UndefinedVariable { .. })));
    }

    #[test]
    fn undefined_consequent_label_rejected() {
        let result = two_region_model(vec![Rule::simple("dist", "near", "warp")]);
        assert!(matches!(
            result,
            Err(FuzzyError::UndefinedLabel { ref label, .. }) if label == "warp"
        ));
    }

    #[test]
    fn empty_rule_set_rejected() {
        assert!(matches!(two_region_model(vec![]), Err(FuzzyError::EmptyRuleSet)));
    }

    #[test]
    fn duplicate_label_rejected() {
        let mut dist =
            LinguisticVariable::new("dist", Universe::linspace(0.0, 6.0, 100)).unwrap();
        dist.add_term("near", MembershipFunction::triangle(0.0, 1.0, 2.0).unwrap())
            .unwrap();
        let result = dist.add_term("near", MembershipFunction::triangle(1.0, 2.0, 3.0).unwrap());
        assert!(matches!(result, Err(FuzzyError::DuplicateLabel { .. })));
    }

    // Inference must be order-independent: permuting the rule list before
    // compilation yields identical outputs for all inputs.
    #[test]
    fn rule_order_does_not_affect_inference() {
        let rules = vec![
            Rule::simple("dist", "near", "slow"),
            Rule::simple("dist", "far", "fast"),
        ];
        let mut reversed = rules.clone();
        reversed.reverse();
        let forward = two_region_model(rules).unwrap();
        let backward = two_region_model(reversed).unwrap();

        let mut x = 0.0;
        while x <= 6.0 {
            assert_eq!(forward.infer(&[("dist", x)]), backward.infer(&[("dist", x)]));
            x += 0.125;
        }
    }

    // Defuzzified output stays within the consequent universe, including for
    // out-of-domain inputs (clamped before fuzzification).
    #[test]
    fn output_stays_within_consequent_universe() {
        let model = two_region_model(vec![
            Rule::simple("dist", "near", "slow"),
            Rule::simple("dist", "far", "fast"),
        ])
        .unwrap();
        let min = model.consequent().universe().min();
        let max = model.consequent().universe().max();

        for x in [-5.0, 0.0, 1.0, 2.5, 6.0, 50.0] {
            let out = model.infer(&[("dist", x)]);
            assert!(out >= min && out <= max, "infer({}) = {} out of bounds", x, out);
        }
    }

    // AND combines with min, OR with max.
    #[test]
    fn condition_combinators() {
        let mut dist = LinguisticVariable::new("dist", Universe::linspace(0.0, 6.0, 601)).unwrap();
        dist.add_term("near", MembershipFunction::trapezoid(0.0, 0.0, 1.0, 2.0).unwrap())
            .unwrap();
        let mut gap = LinguisticVariable::new("gap", Universe::linspace(0.0, 6.0, 601)).unwrap();
        gap.add_term("open", MembershipFunction::trapezoid(3.0, 4.0, 6.0, 6.0).unwrap())
            .unwrap();
        let mut vel = LinguisticVariable::new("vel", Universe::linspace(0.0, 10.0, 601)).unwrap();
        vel.add_term("go", MembershipFunction::triangle(4.0, 5.0, 6.0).unwrap())
            .unwrap();

        // dist fully near (1.0), gap half open (0.5): AND clips at 0.5
        let and_model = FuzzyModel::new(
            vec![dist.clone(), gap.clone()],
            vel.clone(),
            vec![Rule::new(
                Condition::is("dist", "near").and(Condition::is("gap", "open")),
                "go",
            )],
        )
        .unwrap();
        let or_model = FuzzyModel::new(
            vec![dist, gap],
            vel,
            vec![Rule::new(
                Condition::is("dist", "near").or(Condition::is("gap", "open")),
                "go",
            )],
        )
        .unwrap();

        let inputs = [("dist", 0.5), ("gap", 3.5)];
        // both clip the same symmetric triangle, so the centroid is 5 either
        // way; the distinction shows up when one side contributes nothing
        let and_out = and_model.infer(&inputs);
        let or_out = or_model.infer(&inputs);
        assert!((and_out - 5.0).abs() < 0.05);
        assert!((or_out - 5.0).abs() < 0.05);

        // gap input missing: the AND rule dies (degree 0), the OR rule
        // still fires on the remaining term
        let partial = [("dist", 0.5)];
        assert_eq!(and_model.infer(&partial), 0.0);
        assert!((or_model.infer(&partial) - 5.0).abs() < 0.05);
    }

    // With no rule fired the aggregated area is zero; the documented
    // fallback is 0 clamped into the consequent universe.
    #[test]
    fn zero_area_fallback() {
        let model = two_region_model(vec![Rule::simple("dist", "near", "slow")]).unwrap();
        // dist = 4.0 is fully outside 'near': nothing fires
        assert_eq!(model.infer(&[("dist", 4.0)]), 0.0);

        // missing input behaves the same
        assert_eq!(model.infer(&[]), 0.0);
    }

    // Scenario from the tuning sheet: below the stop distance the output is
    // forced to zero; well beyond the break distance it saturates at
    // max_velocity (within the overlap tolerance of the rule base).
    #[test]
    fn velocity_scenario() {
        let model = VelocityModel::new(reference_profile()).unwrap();

        assert_eq!(model.velocity(0.5), 0.0);
        assert!((model.velocity(5.0) - 10.0).abs() < 0.1);
    }

    // The snap threshold turns a small-but-nonzero defuzzified velocity into
    // an exact zero; the raw value stays observable.
    #[test]
    fn snap_epsilon_snaps_to_exact_zero() {
        let mut profile = reference_profile();
        profile.snap_epsilon = 5.0;
        let model = VelocityModel::new(profile).unwrap();

        let raw = model.raw_velocity(1.55);
        assert!(raw > 0.0 && raw < 5.0, "raw velocity {} outside snap band", raw);
        assert_eq!(model.velocity(1.55), 0.0);
    }

    #[test]
    fn below_stop_distance_short_circuits() {
        let model = VelocityModel::new(reference_profile()).unwrap();
        assert_eq!(model.raw_velocity(1.49), 0.0);
        assert!(model.raw_velocity(1.51) >= 0.0);
    }

    // Transition bands that overlap produce a non-monotonic medium region
    // and must be rejected when the model is compiled.
    #[test]
    fn overlapping_bands_rejected() {
        let profile = VelocityProfile {
            max_velocity: 10.0,
            break_velocity: 5.0,
            stop_distance: 1.9,
            break_distance: 2.0,
            sharpness: 0.2,
            snap_epsilon: 0.05,
        };
        assert!(matches!(
            VelocityModel::new(profile),
            Err(FuzzyError::NonMonotonic { .. })
        ));
    }
}
