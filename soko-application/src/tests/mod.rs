use rand::prelude::*;

use soko_core::rating;
use soko_db_mem::MemoryBackend;
use soko_entities::builders::*;

use crate::{error::ErrorKind, usecases, *};

use crate::ModerationStatus::*;

fn fixture() -> Engine<MemoryBackend> {
    Engine::new(MemoryBackend::new())
}

fn new_place(id: &str, name: &str, city: &str) -> Place {
    Place::build()
        .id(id)
        .name(name)
        .city(city)
        .finish()
}

fn new_review(place_id: &str, value: i8) -> usecases::NewReview {
    usecases::NewReview {
        user_id: "u1".into(),
        place_id: place_id.into(),
        product_id: None,
        value,
        title: None,
        text: "good stock of staples".into(),
        context: ReviewContext::General,
    }
}

fn approved_review(engine: &Engine<MemoryBackend>, place_id: &str, value: i8) -> Review {
    let review = engine.on_review_submitted(new_review(place_id, value)).unwrap();
    engine
        .on_review_moderated(review.id.as_str(), Approved)
        .unwrap()
}

fn stats_of(engine: &Engine<MemoryBackend>, place_id: &str) -> PlaceStats {
    engine.db().get_place(place_id).unwrap().stats
}

// ----------------------------------------------------------------------
// End-to-end moderation scenario
// ----------------------------------------------------------------------

#[test]
fn review_lifecycle_end_to_end() {
    let engine = fixture();
    engine
        .upsert_place(new_place("p1", "Mama Africa Market", "Houston"))
        .unwrap();

    let first = engine.on_review_submitted(new_review("p1", 5)).unwrap();
    assert_eq!(first.status, Submitted);
    assert_eq!(stats_of(&engine, "p1").review_count, 0);

    engine.on_review_moderated(first.id.as_str(), Approved).unwrap();
    let stats = stats_of(&engine, "p1");
    assert_eq!(stats.rating.rounded(), 5.0);
    assert_eq!(stats.review_count, 1);

    let second = engine.on_review_submitted(new_review("p1", 3)).unwrap();
    engine.on_review_moderated(second.id.as_str(), Approved).unwrap();
    let stats = stats_of(&engine, "p1");
    assert_eq!(stats.rating.rounded(), 4.0);
    assert_eq!(stats.review_count, 2);

    // Flagging keeps the review counted.
    engine.on_review_moderated(first.id.as_str(), Flagged).unwrap();
    let stats = stats_of(&engine, "p1");
    assert_eq!(stats.rating.rounded(), 4.0);
    assert_eq!(stats.review_count, 2);

    // Resolving the flag to removed recomputes from the remaining set.
    engine.on_review_moderated(first.id.as_str(), Removed).unwrap();
    let stats = stats_of(&engine, "p1");
    assert_eq!(stats.rating.rounded(), 3.0);
    assert_eq!(stats.review_count, 1);
}

#[test]
fn moderation_guard_chain() {
    let engine = fixture();
    engine
        .upsert_place(new_place("p1", "Mama Africa Market", "Houston"))
        .unwrap();
    let review = approved_review(&engine, "p1", 4);
    let before = stats_of(&engine, "p1");

    engine.on_review_moderated(review.id.as_str(), Flagged).unwrap();
    engine.on_review_moderated(review.id.as_str(), Approved).unwrap();
    // Counts restored to the pre-flag value.
    assert_eq!(stats_of(&engine, "p1"), before);

    let err = engine
        .on_review_moderated(review.id.as_str(), Rejected)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StateConflict);
}

// ----------------------------------------------------------------------
// Incremental aggregation vs. full recompute
// ----------------------------------------------------------------------

#[test]
fn incremental_rating_matches_recompute_for_random_interleavings() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let engine = fixture();
        engine
            .upsert_place(new_place("p1", "Mama Africa Market", "Houston"))
            .unwrap();
        let mut live: Vec<Id> = Vec::new();

        for _ in 0..40 {
            if live.is_empty() || rng.gen_bool(0.6) {
                let review = engine
                    .on_review_submitted(new_review("p1", rng.gen_range(1..=5)))
                    .unwrap();
                engine
                    .on_review_moderated(review.id.as_str(), Approved)
                    .unwrap();
                live.push(review.id);
            } else {
                let idx = rng.gen_range(0..live.len());
                let id = live.swap_remove(idx);
                engine.on_review_moderated(id.as_str(), Removed).unwrap();
            }

            let stats = stats_of(&engine, "p1");
            let reviews = engine.db().load_reviews_of_place("p1").unwrap();
            let (avg, count) = rating::recompute(&reviews);
            assert_eq!(stats.review_count, count);
            assert_eq!(stats.rating.rounded(), avg.rounded());
            assert!((f64::from(stats.rating) - f64::from(avg)).abs() < 1e-9);
        }
    }
}

// ----------------------------------------------------------------------
// Votes and favorites
// ----------------------------------------------------------------------

#[test]
fn vote_idempotence_through_the_engine() {
    let engine = fixture();
    engine
        .upsert_place(new_place("p1", "Mama Africa Market", "Houston"))
        .unwrap();
    let review = approved_review(&engine, "p1", 4);
    let target = VoteTarget::Review(review.id.clone());

    for _ in 0..5 {
        engine
            .on_vote("voter".into(), target.clone(), VoteDirection::Helpful)
            .unwrap();
    }
    let loaded = engine.db().get_review(review.id.as_str()).unwrap();
    assert_eq!(loaded.helpful_count, 1);
    assert_eq!(loaded.unhelpful_count, 0);
}

#[test]
fn favorite_target_rule_and_uniqueness() {
    // Both or neither endpoint set: rejected at the boundary.
    assert!(FavoriteTarget::new(None, None).is_err());
    assert!(FavoriteTarget::new(Some("p1".into()), Some("x1".into())).is_err());
    let err = usecases::Error::from(FavoriteTarget::new(None, None).unwrap_err());
    assert_eq!(err.kind(), usecases::ErrorKind::Validation);

    let engine = fixture();
    engine
        .upsert_place(new_place("p1", "Mama Africa Market", "Houston"))
        .unwrap();
    let target = FavoriteTarget::new(Some("p1".into()), None).unwrap();
    engine.add_favorite("u1".into(), target.clone()).unwrap();
    engine.add_favorite("u1".into(), target.clone()).unwrap();
    assert_eq!(engine.favorites_of_user("u1").unwrap().len(), 1);

    engine.remove_favorite("u1", &target).unwrap();
    assert!(engine.favorites_of_user("u1").unwrap().is_empty());
}

// ----------------------------------------------------------------------
// Availability joins
// ----------------------------------------------------------------------

fn link(place_id: &str, product_id: &str) -> usecases::NewInventoryLink {
    usecases::NewInventoryLink {
        place_id: place_id.into(),
        product_id: product_id.into(),
        commonly_available: true,
        typical_price: None,
        note: None,
    }
}

#[test]
fn fresher_verification_breaks_rating_ties() {
    let engine = fixture();
    engine
        .upsert_product(Product::build().id("x1").name("Gari").finish())
        .unwrap();
    engine
        .upsert_place(new_place("p1", "First Market", "Houston"))
        .unwrap();
    engine
        .upsert_place(new_place("p2", "Second Market", "Houston"))
        .unwrap();
    for place_id in ["p1", "p2"] {
        let mut stats = stats_of(&engine, place_id);
        stats.rating = 4.5.into();
        stats.review_count = 10;
        engine.db().update_place_stats(place_id, stats).unwrap();
    }

    let yesterday = Timestamp::from_seconds(86_400);
    let today = Timestamp::from_seconds(2 * 86_400);
    usecases::store_inventory_link(engine.db(), link("p1", "x1"), yesterday).unwrap();
    usecases::store_inventory_link(engine.db(), link("p2", "x1"), today).unwrap();

    let rows = engine.places_for_product("x1", false).unwrap();
    let ids: Vec<_> = rows.iter().map(|(p, _)| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p2", "p1"]);
}

#[test]
fn products_for_place_joins_both_directions() {
    let engine = fixture();
    engine
        .upsert_place(new_place("p1", "First Market", "Houston"))
        .unwrap();
    engine
        .upsert_product(Product::build().id("x1").name("Gari").finish())
        .unwrap();
    engine
        .upsert_product(Product::build().id("x2").name("Egusi").finish())
        .unwrap();
    engine.on_inventory_upserted(link("p1", "x1")).unwrap();
    engine.on_inventory_upserted(link("p1", "x2")).unwrap();

    let products = engine.products_for_place("p1", false).unwrap();
    assert_eq!(products.len(), 2);
    let places = engine.places_for_product("x1", false).unwrap();
    assert_eq!(places.len(), 1);
    assert_eq!(places[0].0.id.as_str(), "p1");
}

// ----------------------------------------------------------------------
// Search
// ----------------------------------------------------------------------

fn searchable_fixture() -> Engine<MemoryBackend> {
    let engine = fixture();
    engine
        .upsert_place(
            Place::build()
                .id("p1")
                .name("Mama Africa Market")
                .city("Houston")
                .specialization("West African groceries")
                .finish(),
        )
        .unwrap();
    engine
        .upsert_place(
            Place::build()
                .id("p2")
                .name("Sahel Grocery")
                .city("Dallas")
                .finish(),
        )
        .unwrap();
    engine
        .upsert_product(
            Product::build()
                .id("x1")
                .name("Gari")
                .locale_name("es", "Harina de yuca")
                .alternative_names(vec!["Garri"])
                .search_keywords(vec!["cassava flour"])
                .finish(),
        )
        .unwrap();
    engine
}

#[test]
fn alias_and_locale_queries_resolve_to_the_product() {
    let engine = searchable_fixture();
    for query in ["Garri", "garri", "yuca", "cassava"] {
        let result = engine
            .search(Some(query), &[], &Pagination::default())
            .unwrap();
        assert!(
            result
                .hits
                .iter()
                .any(|hit| hit.id().as_str() == "x1"),
            "query {query:?} did not find the product"
        );
    }
}

#[test]
fn search_is_deterministic() {
    let engine = searchable_fixture();
    let ids = |result: &usecases::SearchResult| {
        result
            .hits
            .iter()
            .map(|hit| hit.id().clone())
            .collect::<Vec<_>>()
    };
    let first = engine
        .search(Some("market grocery gari"), &[], &Pagination::default())
        .unwrap();
    let second = engine
        .search(Some("market grocery gari"), &[], &Pagination::default())
        .unwrap();
    assert_eq!(ids(&first), ids(&second));
    assert_eq!(first.total, second.total);
}

#[test]
fn empty_text_is_a_filter_only_query() {
    let engine = searchable_fixture();
    let result = engine
        .search(None, &[("city", "houston")], &Pagination::default())
        .unwrap();
    let ids: Vec<_> = result.hits.iter().map(|hit| hit.id().as_str()).collect();
    assert_eq!(ids, vec!["p1"]);

    // Punctuation-only text normalizes to the same thing.
    let result = engine
        .search(Some("?!"), &[("city", "houston")], &Pagination::default())
        .unwrap();
    assert_eq!(result.total, 1);
}

#[test]
fn unknown_filter_key_is_a_validation_error() {
    let engine = searchable_fixture();
    let err = engine
        .search(Some("gari"), &[("flavor", "hot")], &Pagination::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn higher_rated_place_outranks_on_equal_text_match() {
    let engine = fixture();
    engine
        .upsert_place(new_place("pa", "Lagos Market", "Houston"))
        .unwrap();
    engine
        .upsert_place(new_place("pb", "Accra Market", "Houston"))
        .unwrap();
    let mut stats = stats_of(&engine, "pb");
    stats.rating = 4.8.into();
    stats.review_count = 12;
    engine.db().update_place_stats("pb", stats).unwrap();

    let result = engine
        .search(Some("market"), &[], &Pagination::default())
        .unwrap();
    let ids: Vec<_> = result.hits.iter().map(|hit| hit.id().as_str()).collect();
    assert_eq!(ids, vec!["pb", "pa"]);
}

#[test]
fn pagination_reports_the_full_total() {
    let engine = fixture();
    for i in 0..7 {
        engine
            .upsert_place(new_place(&format!("p{i}"), "Corner Market", "Houston"))
            .unwrap();
    }
    let page = Pagination {
        offset: Some(4),
        limit: Some(2),
    };
    let result = engine.search(Some("market"), &[], &page).unwrap();
    assert_eq!(result.total, 7);
    assert_eq!(result.hits.len(), 2);
}

#[test]
fn deleted_place_disappears_from_search_and_joins() {
    let engine = searchable_fixture();
    engine
        .upsert_product(Product::build().id("x9").name("Plantain").finish())
        .unwrap();
    engine.on_inventory_upserted(link("p1", "x9")).unwrap();

    engine.delete_place("p1").unwrap();

    let result = engine
        .search(Some("mama africa"), &[], &Pagination::default())
        .unwrap();
    assert!(result.hits.is_empty());
    assert!(engine.places_for_product("x9", false).unwrap().is_empty());
}

#[test]
fn renamed_place_is_not_found_under_stale_tokens() {
    let engine = searchable_fixture();
    let mut renamed = engine.db().get_place("p1").unwrap();
    renamed.name = "Sunrise Food Hall".into();
    renamed.specialization = None;
    engine.upsert_place(renamed).unwrap();

    let stale = engine
        .search(Some("mama"), &[], &Pagination::default())
        .unwrap();
    assert!(stale.hits.iter().all(|hit| hit.id().as_str() != "p1"));
    let fresh = engine
        .search(Some("sunrise"), &[], &Pagination::default())
        .unwrap();
    assert!(fresh.hits.iter().any(|hit| hit.id().as_str() == "p1"));
}

// ----------------------------------------------------------------------
// Q&A
// ----------------------------------------------------------------------

#[test]
fn question_and_answer_flow_keeps_counters_consistent() {
    let engine = fixture();
    engine
        .upsert_place(new_place("p1", "Mama Africa Market", "Houston"))
        .unwrap();
    let question = engine
        .ask_question(usecases::NewQuestion {
            user_id: "u1".into(),
            place_id: Some("p1".into()),
            product_id: None,
            text: "Fresh okra on weekends?".into(),
            category: Some("availability".into()),
        })
        .unwrap();

    let community = engine
        .on_answer_created(usecases::NewAnswer {
            question_id: question.id.clone(),
            user_id: "u2".into(),
            text: "Saw some last Saturday".into(),
            authoritative: false,
        })
        .unwrap();
    let owner = engine
        .on_answer_created(usecases::NewAnswer {
            question_id: question.id.clone(),
            user_id: "owner".into(),
            text: "Every Saturday morning".into(),
            authoritative: true,
        })
        .unwrap();

    let loaded = engine.db().get_question(question.id.as_str()).unwrap();
    assert_eq!(loaded.answer_count, 2);
    assert!(loaded.answered);

    for voter in ["a", "b"] {
        engine
            .on_vote(
                voter.into(),
                VoteTarget::Answer(community.id.clone()),
                VoteDirection::Helpful,
            )
            .unwrap();
    }
    let ranked = engine.answers_for_question(question.id.as_str()).unwrap();
    let ids: Vec<_> = ranked.iter().map(|a| &a.id).collect();
    assert_eq!(ids, vec![&owner.id, &community.id]);
}
