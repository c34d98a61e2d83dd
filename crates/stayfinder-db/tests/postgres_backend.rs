//! Integration tests against a real PostGIS database.
//!
//! These need a running PostgreSQL with the PostGIS extension available.
//! Point `STAYFINDER_TEST_DATABASE_URL` at a throwaway database and run
//! with `cargo test -p stayfinder-db -- --ignored`. The hotels table is
//! truncated before each test.

use stayfinder_core::ports::HotelRepository;
use stayfinder_core::testdata;
use stayfinder_db::repositories::{MemoryHotelRepository, PostgresHotelRepository};
use stayfinder_db::setup::{reset_database, setup_database};

const UTM_33N: i32 = 32633;

async fn postgres_repository() -> PostgresHotelRepository {
    let url = std::env::var("STAYFINDER_TEST_DATABASE_URL")
        .expect("STAYFINDER_TEST_DATABASE_URL must point at a PostGIS test database");
    let pool = setup_database(&url).await.expect("database setup failed");
    reset_database(&pool).await.expect("truncate failed");
    PostgresHotelRepository::new(pool)
}

async fn seed(repo: &dyn HotelRepository) {
    for hotel in testdata::new_hotels() {
        repo.insert(&hotel).await.expect("insert failed");
    }
}

fn id_set(hotels: &[stayfinder_core::Hotel]) -> Vec<i64> {
    let mut ids: Vec<i64> = hotels.iter().map(|h| h.id).collect();
    ids.sort_unstable();
    ids
}

#[tokio::test]
#[ignore = "requires a PostGIS database (STAYFINDER_TEST_DATABASE_URL)"]
async fn radius_queries_return_expected_id_sets() {
    let repo = postgres_repository().await;
    seed(&repo).await;
    let origin = testdata::query_point();

    struct RadiusCase {
        radius_m: f64,
        limit: i64,
        expected_ids: &'static [i64],
    }
    let cases = [
        RadiusCase {
            radius_m: 300.0,
            limit: 5,
            expected_ids: &[],
        },
        RadiusCase {
            radius_m: 4_000.0,
            limit: 5,
            expected_ids: &[4, 6, 10],
        },
        RadiusCase {
            radius_m: 4_000.0,
            limit: 100,
            expected_ids: &[4, 6, 10],
        },
        RadiusCase {
            radius_m: 5_000.0,
            limit: 5,
            expected_ids: &[1, 4, 6, 7, 10],
        },
        RadiusCase {
            radius_m: 5_000.0,
            limit: 100,
            expected_ids: &[1, 2, 4, 6, 7, 10, 13, 14],
        },
    ];

    for case in cases {
        let results = repo
            .search_within_distance(&origin, case.radius_m, case.limit)
            .await
            .unwrap();
        assert_eq!(
            id_set(&results),
            case.expected_ids,
            "radius {} limit {}",
            case.radius_m,
            case.limit
        );
    }
}

#[tokio::test]
#[ignore = "requires a PostGIS database (STAYFINDER_TEST_DATABASE_URL)"]
async fn both_backends_agree_on_membership() {
    let postgres = postgres_repository().await;
    seed(&postgres).await;

    let memory = MemoryHotelRepository::new(UTM_33N).unwrap();
    seed(&memory).await;

    let origin = testdata::query_point();

    for radius_m in [
        1_000.0, 2_000.0, 3_000.0, 4_000.0, 4_500.0, 6_000.0, 8_000.0, 12_000.0,
    ] {
        let geographic = postgres
            .search_within_distance(&origin, radius_m, 100)
            .await
            .unwrap();
        let planar = memory
            .search_within_distance(&origin, radius_m, 100)
            .await
            .unwrap();
        assert_eq!(id_set(&geographic), id_set(&planar), "radius {radius_m}");
    }
}

#[tokio::test]
#[ignore = "requires a PostGIS database (STAYFINDER_TEST_DATABASE_URL)"]
async fn crud_round_trip() {
    let repo = postgres_repository().await;
    seed(&repo).await;

    let mut hotel = repo.get_by_id(1).await.unwrap();
    hotel.name = "Updated Hotel Name".to_string();
    repo.update(&hotel).await.unwrap();
    assert_eq!(repo.get_by_id(1).await.unwrap().name, "Updated Hotel Name");

    repo.delete(1).await.unwrap();
    assert!(repo.get_by_id(1).await.is_err());
}
