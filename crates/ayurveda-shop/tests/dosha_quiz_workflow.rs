//! End-to-end behaviour of the dosha quiz: scoring through the service facade and the
//! `/api/dosha-quiz` routes, with recommendations drawn from a small hand-built catalog.

mod common {
    use std::sync::Arc;

    use ayurveda_shop::catalog::NewProduct;
    use ayurveda_shop::config::StorefrontConfig;
    use ayurveda_shop::dosha::DoshaAffinity;
    use ayurveda_shop::quiz::{DoshaQuizService, RecommendationSelector};
    use ayurveda_shop::storefront_router;
    use ayurveda_shop::store::InMemoryStore;

    pub(super) fn product(name: &str, dosha: Option<DoshaAffinity>) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: format!("{name} for daily rituals"),
            price: 30.0,
            category: "wellness_tea".to_string(),
            dosha_type: dosha,
            image_url: "https://images.unsplash.com/photo-1".to_string(),
            in_stock: true,
            is_bestseller: false,
            is_new: false,
            rating: 4.5,
        }
    }

    /// Five entries: two vata, one pitta, one tri-dosha, one kapha, in that shelf order.
    pub(super) fn small_catalog() -> Vec<NewProduct> {
        vec![
            product("Warming Sesame Oil", Some(DoshaAffinity::Vata)),
            product("Cooling Rose Mist", Some(DoshaAffinity::Pitta)),
            product("Ashwagandha Calm", Some(DoshaAffinity::Vata)),
            product("Triphala Balance", Some(DoshaAffinity::TriDosha)),
            product("Ginger Lift Tea", Some(DoshaAffinity::Kapha)),
        ]
    }

    pub(super) fn store(products: Vec<NewProduct>) -> Arc<InMemoryStore> {
        Arc::new(InMemoryStore::seeded(products).expect("store seeds"))
    }

    pub(super) fn build_service(
        products: Vec<NewProduct>,
    ) -> DoshaQuizService<InMemoryStore, InMemoryStore> {
        let store = store(products);
        DoshaQuizService::new(store.clone(), store, RecommendationSelector::default())
    }

    pub(super) fn build_router(products: Vec<NewProduct>) -> axum::Router {
        storefront_router(store(products), &StorefrontConfig::default())
    }
}

mod scoring {
    use super::common::*;
    use ayurveda_shop::dosha::{Dosha, DoshaAffinity};
    use ayurveda_shop::quiz::AnswerSet;

    fn names(outcome: &ayurveda_shop::quiz::QuizOutcome) -> Vec<&str> {
        outcome
            .recommendations
            .iter()
            .map(|product| product.name.as_str())
            .collect()
    }

    #[test]
    fn vata_majority_recommends_vata_and_tri_dosha_in_shelf_order() {
        let service = build_service(small_catalog());
        let answers = AnswerSet::new()
            .with_answer("1", "vata")
            .with_answer("2", "vata")
            .with_answer("3", "pitta");

        let outcome = service.submit(&answers).expect("quiz scores");

        assert_eq!(outcome.score.dominant_dosha, Dosha::Vata);
        assert_eq!(outcome.score.tally.vata_count, 2);
        assert_eq!(outcome.score.tally.pitta_count, 1);
        assert_eq!(outcome.score.tally.kapha_count, 0);
        assert_eq!(
            names(&outcome),
            ["Warming Sesame Oil", "Ashwagandha Calm", "Triphala Balance"]
        );
    }

    #[test]
    fn recommendations_stop_at_three() {
        let mut catalog = small_catalog();
        catalog.push(product("Brahmi Focus", Some(DoshaAffinity::Vata)));
        catalog.push(product("Dashamool Tonic", Some(DoshaAffinity::Vata)));
        let service = build_service(catalog);

        let outcome = service
            .submit(&AnswerSet::new().with_answer("1", "vata"))
            .expect("quiz scores");

        assert_eq!(outcome.recommendations.len(), 3);
        assert_eq!(
            names(&outcome),
            ["Warming Sesame Oil", "Ashwagandha Calm", "Triphala Balance"]
        );
    }

    #[test]
    fn all_ties_fall_back_to_vata() {
        let service = build_service(small_catalog());
        let answers = AnswerSet::new()
            .with_answer("1", "vata")
            .with_answer("2", "pitta")
            .with_answer("3", "kapha");

        let outcome = service.submit(&answers).expect("quiz scores");
        assert_eq!(outcome.score.dominant_dosha, Dosha::Vata);
    }

    #[test]
    fn pitta_wins_a_tie_with_kapha() {
        let service = build_service(small_catalog());
        let answers = AnswerSet::new()
            .with_answer("1", "pitta")
            .with_answer("2", "kapha");

        let outcome = service.submit(&answers).expect("quiz scores");
        assert_eq!(outcome.score.dominant_dosha, Dosha::Pitta);
        assert_eq!(names(&outcome), ["Cooling Rose Mist", "Triphala Balance"]);
    }

    #[test]
    fn kapha_majority_recommends_kapha_and_tri_dosha() {
        let service = build_service(small_catalog());
        let answers = AnswerSet::new()
            .with_answer("1", "kapha")
            .with_answer("2", "kapha")
            .with_answer("3", "vata");

        let outcome = service.submit(&answers).expect("quiz scores");
        assert_eq!(outcome.score.dominant_dosha, Dosha::Kapha);
        assert_eq!(names(&outcome), ["Triphala Balance", "Ginger Lift Tea"]);
    }

    #[test]
    fn untagged_products_are_never_recommended() {
        let service = build_service(vec![
            product("Plain Clay", None),
            product("Neem Wash", Some(DoshaAffinity::Pitta)),
        ]);

        let outcome = service
            .submit(&AnswerSet::new().with_answer("1", "pitta"))
            .expect("quiz scores");
        assert_eq!(names(&outcome), ["Neem Wash"]);
    }

    #[test]
    fn unknown_tags_are_ignored_without_failing() {
        let service = build_service(small_catalog());
        let answers = AnswerSet::new()
            .with_answer("1", "kapha")
            .with_answer("2", "Kapha")
            .with_answer("3", "ether");

        let outcome = service.submit(&answers).expect("quiz scores");
        assert_eq!(outcome.score.tally.total(), 1);
        assert_eq!(outcome.score.dominant_dosha, Dosha::Kapha);
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn post_result(router: axum::Router, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/dosha-quiz/result")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        (status, serde_json::from_slice(&bytes).expect("json"))
    }

    async fn get_json(router: axum::Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        (status, serde_json::from_slice(&bytes).expect("json"))
    }

    #[tokio::test]
    async fn question_bank_lists_three_questions() {
        let (status, payload) = get_json(build_router(small_catalog()), "/api/dosha-quiz").await;

        assert_eq!(status, StatusCode::OK);
        let questions = payload.as_array().expect("array");
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0]["id"], 1);
        assert!(questions[0]["vataOption"].is_string());
        assert!(questions[0]["pittaOption"].is_string());
        assert!(questions[0]["kaphaOption"].is_string());
    }

    #[tokio::test]
    async fn result_returns_tally_and_recommendations() {
        let body = json!({ "answers": { "1": "vata", "2": "vata", "3": "pitta" } }).to_string();
        let (status, payload) = post_result(build_router(small_catalog()), &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["dominantDosha"], "vata");
        assert_eq!(payload["vataCount"], 2);
        assert_eq!(payload["pittaCount"], 1);
        assert_eq!(payload["kaphaCount"], 0);

        let recommended: Vec<&str> = payload["recommendations"]
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|product| product["name"].as_str())
            .collect();
        assert_eq!(
            recommended,
            ["Warming Sesame Oil", "Ashwagandha Calm", "Triphala Balance"]
        );
        assert_eq!(payload["recommendations"][2]["doshaType"], "tri-dosha");
    }

    #[tokio::test]
    async fn empty_answers_default_to_vata() {
        let (status, payload) =
            post_result(build_router(small_catalog()), r#"{"answers":{}}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["dominantDosha"], "vata");
        assert_eq!(payload["vataCount"], 0);
    }

    #[tokio::test]
    async fn answer_arrays_are_scored_by_position() {
        let (status, payload) = post_result(
            build_router(small_catalog()),
            r#"{"answers":["pitta","pitta","vata"]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["dominantDosha"], "pitta");
        assert_eq!(payload["vataCount"], 1);
        assert_eq!(payload["pittaCount"], 2);
        assert_eq!(payload["kaphaCount"], 0);

        let recommended: Vec<&str> = payload["recommendations"]
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|product| product["name"].as_str())
            .collect();
        assert_eq!(recommended, ["Cooling Rose Mist", "Triphala Balance"]);
    }

    #[tokio::test]
    async fn malformed_submissions_are_rejected() {
        for body in [
            r#"{}"#,
            r#"{"answers":null}"#,
            r#"{"answers":"vata"}"#,
            r#"{"answers":7}"#,
            r#"{"answers":true}"#,
            r#"not json"#,
        ] {
            let (status, payload) = post_result(build_router(small_catalog()), body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
            assert_eq!(payload["message"], "Invalid quiz answers");
        }
    }

    #[tokio::test]
    async fn profiles_resolve_known_doshas_only() {
        let (status, payload) =
            get_json(build_router(Vec::new()), "/api/dosha-quiz/profiles/pitta").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["dosha"], "pitta");
        assert!(payload["balanceTips"].as_array().is_some_and(|tips| !tips.is_empty()));

        let (status, _) =
            get_json(build_router(Vec::new()), "/api/dosha-quiz/profiles/ether").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
