use super::aggregate::best_match_score;
use super::experience::experience_score;
use super::*;
use crate::embedding::mock::{FailingBackend, RecordingBackend};
use crate::embedding::{Embedder, LocalEmbedder};

fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn local_embedder() -> Embedder {
    Embedder::local_only(LocalEmbedder::stub())
}

mod similarity_tests {
    use super::*;

    #[test]
    fn test_identical_vectors_score_100() {
        let v = vec![0.3, -0.5, 0.8];
        assert!((cosine_score(&v, &v) - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_opposite_vectors_score_0() {
        let a = vec![1.0, 0.0];
        let b = vec![-1.0, 0.0];
        assert!(cosine_score(&a, &b).abs() < 1e-4);
    }

    #[test]
    fn test_orthogonal_vectors_score_50() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert!((cosine_score(&a, &b) - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_symmetry() {
        let a = vec![0.2, 0.7, -0.1, 0.4];
        let b = vec![-0.3, 0.9, 0.5, 0.0];
        assert_eq!(cosine_score(&a, &b), cosine_score(&b, &a));
    }

    #[test]
    fn test_bounded() {
        let vectors = [
            vec![1.0, 2.0, 3.0],
            vec![-4.0, 5.0, -6.0],
            vec![0.001, 0.0, 100.0],
        ];
        for a in &vectors {
            for b in &vectors {
                let score = cosine_score(a, b);
                assert!((0.0..=100.0).contains(&score), "score {} out of range", score);
            }
        }
    }

    #[test]
    fn test_zero_magnitude_scores_0() {
        let zero = vec![0.0, 0.0, 0.0];
        let v = vec![1.0, 2.0, 3.0];
        assert_eq!(cosine_score(&zero, &v), 0.0);
        assert_eq!(cosine_score(&v, &zero), 0.0);
        assert_eq!(cosine_score(&zero, &zero), 0.0);
    }

    #[test]
    fn test_degenerate_shapes_score_0() {
        assert_eq!(cosine_score(&[], &[]), 0.0);
        assert_eq!(cosine_score(&[1.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn test_magnitude_invariance() {
        let a = vec![1.0, 2.0, 3.0];
        let scaled: Vec<f32> = a.iter().map(|x| x * 7.5).collect();
        assert!((cosine_score(&a, &scaled) - 100.0).abs() < 1e-3);
    }
}

mod experience_tests {
    use super::*;

    #[test]
    fn test_exceeds_requirement() {
        assert_eq!(experience_score(Some(10), Some(5)), 100.0);
    }

    #[test]
    fn test_meets_requirement_exactly() {
        assert_eq!(experience_score(Some(4), Some(4)), 100.0);
    }

    #[test]
    fn test_proportional_credit() {
        assert_eq!(experience_score(Some(2), Some(4)), 50.0);
        assert_eq!(experience_score(Some(3), Some(4)), 75.0);
        assert!((experience_score(Some(1), Some(3)) - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_experience_against_requirement() {
        assert_eq!(experience_score(Some(0), Some(4)), 0.0);
        assert_eq!(experience_score(None, Some(4)), 0.0);
    }

    #[test]
    fn test_no_requirement_is_vacuous() {
        assert_eq!(experience_score(Some(5), None), 100.0);
        assert_eq!(experience_score(None, None), 100.0);
        assert_eq!(experience_score(Some(5), Some(0)), 100.0);
        assert_eq!(experience_score(None, Some(0)), 100.0);
    }
}

mod aggregate_tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_requirements_score_100() {
        let embedder = local_embedder();
        let score = best_match_score(&[], &texts(&["Python"]), &embedder)
            .await
            .expect("aggregate");
        assert_eq!(score, 100.0);

        // Vacuous even when the candidate holds nothing either.
        let score = best_match_score(&[], &[], &embedder).await.expect("aggregate");
        assert_eq!(score, 100.0);
    }

    #[tokio::test]
    async fn test_empty_held_scores_0() {
        let embedder = local_embedder();
        let score = best_match_score(&texts(&["Python"]), &[], &embedder)
            .await
            .expect("aggregate");
        assert_eq!(score, 0.0);
    }

    #[tokio::test]
    async fn test_exact_match_scores_100() {
        let embedder = local_embedder();
        let score = best_match_score(
            &texts(&["Python", "AWS"]),
            &texts(&["AWS", "Python"]),
            &embedder,
        )
        .await
        .expect("aggregate");
        assert!((score - 100.0).abs() < 1e-3, "score was {}", score);
    }

    #[tokio::test]
    async fn test_case_insensitive_identity() {
        let embedder = local_embedder();
        let score = best_match_score(&texts(&["Python"]), &texts(&["python"]), &embedder)
            .await
            .expect("aggregate");
        assert!((score - 100.0).abs() < 1e-3, "score was {}", score);
    }

    #[tokio::test]
    async fn test_duplicate_held_items_are_idempotent() {
        let embedder = local_embedder();
        let required = texts(&["Python", "Kubernetes"]);

        let base = best_match_score(&required, &texts(&["Python", "Azure"]), &embedder)
            .await
            .expect("aggregate");
        let with_dup = best_match_score(
            &required,
            &texts(&["Python", "Azure", "Python", "azure"]),
            &embedder,
        )
        .await
        .expect("aggregate");

        assert!((base - with_dup).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_matches_direct_pairwise_computation() {
        // required {Python, AWS} vs held {Python, Azure}: Python matches
        // itself at 100, AWS gets its best pairwise similarity s, so the
        // aggregate must be (100 + s) / 2.
        let stub = LocalEmbedder::stub();
        let python = stub.embed("Python").expect("embed");
        let aws = stub.embed("AWS").expect("embed");
        let azure = stub.embed("Azure").expect("embed");

        let s = cosine_score(&aws, &python).max(cosine_score(&aws, &azure));
        assert!(s < 100.0);
        let expected = (100.0 + f64::from(s)) / 2.0;

        let embedder = local_embedder();
        let score = best_match_score(
            &texts(&["Python", "AWS"]),
            &texts(&["Python", "Azure"]),
            &embedder,
        )
        .await
        .expect("aggregate");

        assert!((score - expected).abs() < 1e-3, "{} != {}", score, expected);
    }

    #[tokio::test]
    async fn test_one_held_item_can_satisfy_many_requirements() {
        let embedder = local_embedder();
        let score = best_match_score(
            &texts(&["Python", "Python Programming"]),
            &texts(&["Python"]),
            &embedder,
        )
        .await
        .expect("aggregate");

        // The single held item matches the identical requirement at 100 and
        // still provides the best (nonzero) match for the other.
        let stub = LocalEmbedder::stub();
        let a = stub.embed("Python Programming").expect("embed");
        let b = stub.embed("Python").expect("embed");
        let partial = f64::from(cosine_score(&a, &b));
        let expected = (100.0 + partial) / 2.0;
        assert!((score - expected).abs() < 1e-3);
    }

    #[tokio::test]
    async fn test_union_embedded_in_one_call() {
        let backend = RecordingBackend::new();
        let embedder = Embedder::with_primary(backend, LocalEmbedder::stub());

        best_match_score(
            &texts(&["Python", "AWS"]),
            &texts(&["Python", "Azure"]),
            &embedder,
        )
        .await
        .expect("aggregate");

        let calls = embedder.primary().expect("primary").calls();
        assert_eq!(calls.len(), 1, "expected a single batched call");
        assert_eq!(calls[0], texts(&["Python", "AWS", "Azure"]));
    }

    #[tokio::test]
    async fn test_provider_failure_still_scores() {
        let embedder = Embedder::with_primary(FailingBackend::new(), LocalEmbedder::stub());

        let score = best_match_score(
            &texts(&["Python"]),
            &texts(&["Python"]),
            &embedder,
        )
        .await
        .expect("fallback must produce a score");

        assert!((score - 100.0).abs() < 1e-3);
    }
}

mod compose_tests {
    use super::*;

    #[test]
    fn test_weighted_combination() {
        let weights = Weights {
            skills: 0.6,
            experience: 0.3,
            certifications: 0.1,
        };

        let result = compose(80.0, 100.0, 50.0, &weights);

        assert_eq!(result.overall, 83.0);
        assert_eq!(result.skills, 80.0);
        assert_eq!(result.experience, 100.0);
        assert_eq!(result.certifications, 50.0);
    }

    #[test]
    fn test_default_weights() {
        let result = compose(80.0, 100.0, 50.0, &Weights::default());
        assert_eq!(result.overall, 83.0);
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        let weights = Weights {
            skills: 1.0,
            experience: 0.0,
            certifications: 0.0,
        };

        let result = compose(100.0 / 3.0, 0.0, 0.0, &weights);
        assert_eq!(result.skills, 33.33);
        assert_eq!(result.overall, 33.33);
    }

    #[test]
    fn test_weights_are_literal_multipliers() {
        // Weights summing past 1 legitimately push overall past 100.
        let weights = Weights {
            skills: 1.0,
            experience: 1.0,
            certifications: 1.0,
        };

        let result = compose(80.0, 100.0, 50.0, &weights);
        assert_eq!(result.overall, 230.0);

        // And all-zero weights produce 0 regardless of sub-scores.
        let weights = Weights {
            skills: 0.0,
            experience: 0.0,
            certifications: 0.0,
        };
        assert_eq!(compose(80.0, 100.0, 50.0, &weights).overall, 0.0);
    }

    #[test]
    fn test_explanation_attached() {
        let result = compose(85.0, 60.0, 40.0, &Weights::default());
        assert!(result.explanation.contains("Strong skills match (85.0%)"));
        assert!(result
            .explanation
            .contains("partially meets experience requirements (60.0%)"));
        assert!(result.explanation.contains("limited certification match (40.0%)"));
    }
}

mod explanation_tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::of(100.0), Tier::Strong);
        assert_eq!(Tier::of(80.0), Tier::Strong);
        assert_eq!(Tier::of(79.99), Tier::Moderate);
        assert_eq!(Tier::of(50.0), Tier::Moderate);
        assert_eq!(Tier::of(49.99), Tier::Weak);
        assert_eq!(Tier::of(0.0), Tier::Weak);
    }

    #[test]
    fn test_strong_marker() {
        let text = render_explanation(85.0, 85.0, 85.0);
        assert!(text.contains("Strong"));
    }

    #[test]
    fn test_weak_marker() {
        let text = render_explanation(45.0, 45.0, 45.0);
        assert!(text.contains("Weak"));
    }

    #[test]
    fn test_three_clauses_joined_with_periods() {
        let text = render_explanation(90.0, 55.0, 20.0);
        assert_eq!(
            text,
            "Strong skills match (90.0%). partially meets experience requirements (55.0%). \
             limited certification match (20.0%)."
        );
    }
}

mod scorer_tests {
    use super::*;

    fn candidate(skills: &[&str], experience: Option<u32>, certs: &[&str]) -> CandidateProfile {
        CandidateProfile {
            skills: texts(skills),
            experience,
            certifications: texts(certs),
        }
    }

    fn job(skills: &[&str], experience: Option<u32>, certs: &[&str]) -> JobRequirement {
        JobRequirement {
            required_skills: texts(skills),
            required_experience: experience,
            required_certifications: texts(certs),
        }
    }

    #[tokio::test]
    async fn test_perfect_candidate() {
        let scorer = MatchScorer::new(local_embedder());

        let result = scorer
            .score(
                &candidate(&["Python", "AWS"], Some(6), &["CKA"]),
                &job(&["Python", "AWS"], Some(5), &["CKA"]),
                &Weights::default(),
            )
            .await
            .expect("score");

        assert_eq!(result.skills, 100.0);
        assert_eq!(result.experience, 100.0);
        assert_eq!(result.certifications, 100.0);
        assert_eq!(result.overall, 100.0);
        assert!(result.explanation.contains("Strong skills match"));
    }

    #[tokio::test]
    async fn test_no_requirements_is_vacuous_match() {
        let scorer = MatchScorer::new(local_embedder());

        let result = scorer
            .score(
                &candidate(&[], None, &[]),
                &job(&[], None, &[]),
                &Weights::default(),
            )
            .await
            .expect("score");

        assert_eq!(result.skills, 100.0);
        assert_eq!(result.experience, 100.0);
        assert_eq!(result.certifications, 100.0);
        assert_eq!(result.overall, 100.0);
    }

    #[tokio::test]
    async fn test_empty_candidate_against_requirements() {
        let scorer = MatchScorer::new(local_embedder());

        let result = scorer
            .score(
                &candidate(&[], None, &[]),
                &job(&["Python"], Some(5), &["CKA"]),
                &Weights::default(),
            )
            .await
            .expect("score");

        assert_eq!(result.skills, 0.0);
        assert_eq!(result.experience, 0.0);
        assert_eq!(result.certifications, 0.0);
        assert_eq!(result.overall, 0.0);
        assert!(result.explanation.contains("Weak skills match"));
    }

    #[tokio::test]
    async fn test_survives_primary_outage() {
        let scorer = MatchScorer::new(Embedder::with_primary(
            FailingBackend::new(),
            LocalEmbedder::stub(),
        ));

        let result = scorer
            .score(
                &candidate(&["Python"], Some(3), &[]),
                &job(&["Python"], Some(4), &[]),
                &Weights::default(),
            )
            .await
            .expect("must degrade to local embeddings, not fail");

        assert_eq!(result.skills, 100.0);
        assert_eq!(result.experience, 75.0);
    }

    #[tokio::test]
    async fn test_rank_sorts_best_first() {
        let scorer = MatchScorer::new(local_embedder());

        let candidates = vec![
            ("weak".to_string(), candidate(&[], None, &[])),
            (
                "strong".to_string(),
                candidate(&["Python", "AWS"], Some(10), &["CKA"]),
            ),
            (
                "partial".to_string(),
                candidate(&["Python"], Some(2), &[]),
            ),
        ];

        let ranked = scorer
            .rank(
                &candidates,
                &job(&["Python", "AWS"], Some(4), &["CKA"]),
                &Weights::default(),
            )
            .await
            .expect("rank");

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].candidate_id, "strong");
        assert_eq!(ranked[0].score.overall, 100.0);
        assert_eq!(ranked[2].candidate_id, "weak");
        assert!(ranked[0].score.overall >= ranked[1].score.overall);
        assert!(ranked[1].score.overall >= ranked[2].score.overall);
    }
}

mod types_tests {
    use super::*;

    #[test]
    fn test_score_result_wire_names() {
        let result = compose(80.0, 100.0, 50.0, &Weights::default());
        let json = serde_json::to_value(&result).expect("serialize");

        assert_eq!(json["overallScore"], 83.0);
        assert_eq!(json["skillsScore"], 80.0);
        assert_eq!(json["experienceScore"], 100.0);
        assert_eq!(json["certsScore"], 50.0);
        assert!(json["explanation"].is_string());
    }

    #[test]
    fn test_job_requirement_wire_names() {
        let json = r#"{
            "requiredSkills": ["Python"],
            "requiredExperience": 4,
            "requiredCerts": ["CKA"]
        }"#;

        let job: JobRequirement = serde_json::from_str(json).expect("deserialize");
        assert_eq!(job.required_skills, texts(&["Python"]));
        assert_eq!(job.required_experience, Some(4));
        assert_eq!(job.required_certifications, texts(&["CKA"]));
    }

    #[test]
    fn test_candidate_profile_defaults() {
        let profile: CandidateProfile = serde_json::from_str("{}").expect("deserialize");
        assert!(profile.skills.is_empty());
        assert!(profile.experience.is_none());
        assert!(profile.certifications.is_empty());
    }

    #[test]
    fn test_weights_defaults() {
        let weights: Weights = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(weights.skills, 0.6);
        assert_eq!(weights.experience, 0.3);
        assert_eq!(weights.certifications, 0.1);

        let partial: Weights = serde_json::from_str(r#"{"skills": 0.8}"#).expect("deserialize");
        assert_eq!(partial.skills, 0.8);
        assert_eq!(partial.experience, 0.3);
    }
}
