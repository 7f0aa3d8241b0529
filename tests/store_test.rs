//! Repository tests against a migrated in-memory SQLite database.

use uuid::Uuid;

use common::AppError;
use domain::{
    Assignment, CarSearch, DriverSearch, LicenseNumber, Manufacturer, ManufacturerSearch,
    NewDriver, UpdateCar,
};
use taxi_service::infra::{
    AssignmentRepository, AssignmentStore, CarRepository, CarStore, Database, DriverRepository,
    DriverStore, ManufacturerRepository, ManufacturerStore,
};
use taxi_service::types::PaginationParams;

struct Stores {
    manufacturers: ManufacturerStore,
    cars: CarStore,
    drivers: DriverStore,
    assignments: AssignmentStore,
}

async fn stores() -> Stores {
    let db = Database::in_memory().await.unwrap();
    let conn = db.get_connection();
    Stores {
        manufacturers: ManufacturerStore::new(conn.clone()),
        cars: CarStore::new(conn.clone()),
        drivers: DriverStore::new(conn.clone()),
        assignments: AssignmentStore::new(conn),
    }
}

fn new_driver(username: &str, first_name: &str, license: &str) -> NewDriver {
    NewDriver {
        username: username.into(),
        password_hash: "not-a-real-hash".into(),
        first_name: first_name.into(),
        last_name: "Tester".into(),
        license_number: LicenseNumber::parse(license).unwrap(),
    }
}

fn all() -> PaginationParams {
    PaginationParams::new(1, 100)
}

async fn seed_manufacturers(s: &Stores) -> (Manufacturer, Manufacturer) {
    let bmw = s
        .manufacturers
        .create("BMW".into(), "Germany".into())
        .await
        .unwrap();
    let zaz = s
        .manufacturers
        .create("Tavria".into(), "Ukraine".into())
        .await
        .unwrap();
    (bmw, zaz)
}

#[tokio::test]
async fn test_manufacturer_search_is_case_insensitive() {
    let s = stores().await;
    seed_manufacturers(&s).await;

    let search = ManufacturerSearch {
        manufacturer: Some("bm".into()),
    };
    let page = s.manufacturers.search(&search, all()).await.unwrap();
    let names: Vec<_> = page.data.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["BMW"]);
    assert_eq!(page.meta.total, 1);

    let everything = s
        .manufacturers
        .search(&ManufacturerSearch::default(), all())
        .await
        .unwrap();
    assert_eq!(everything.meta.total, 2);
}

#[tokio::test]
async fn test_like_wildcards_are_literal() {
    let s = stores().await;
    s.manufacturers
        .create("100% Motors".into(), "Nowhere".into())
        .await
        .unwrap();
    s.manufacturers
        .create("1000 Motors".into(), "Nowhere".into())
        .await
        .unwrap();

    let search = ManufacturerSearch {
        manufacturer: Some("0%".into()),
    };
    let page = s.manufacturers.search(&search, all()).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].name, "100% Motors");
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let s = stores().await;
    seed_manufacturers(&s).await;

    let page = s
        .manufacturers
        .search(&ManufacturerSearch::default(), PaginationParams::new(9, 5))
        .await
        .unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.meta.total, 2);
    assert_eq!(page.meta.total_pages, 1);
}

#[tokio::test]
async fn test_huge_page_is_empty() {
    let s = stores().await;
    seed_manufacturers(&s).await;

    for params in [
        PaginationParams::new(4_000_000_000_000_000_000, 5),
        PaginationParams::new(u64::MAX, 100),
    ] {
        let page = s
            .manufacturers
            .search(&ManufacturerSearch::default(), params)
            .await
            .unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.meta.total, 2);
    }
}

#[tokio::test]
async fn test_search_keeps_non_ascii_letters() {
    let s = stores().await;
    s.manufacturers
        .create("Škoda".into(), "Czechia".into())
        .await
        .unwrap();
    seed_manufacturers(&s).await;

    let search = ManufacturerSearch {
        manufacturer: Some("ŠKODA".into()),
    };
    let page = s.manufacturers.search(&search, all()).await.unwrap();
    let names: Vec<_> = page.data.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Škoda"]);
}

#[tokio::test]
async fn test_car_search_by_model_and_manufacturer() {
    let s = stores().await;
    let (bmw, zaz) = seed_manufacturers(&s).await;
    s.cars.create("X5".into(), bmw.id, vec![]).await.unwrap();
    s.cars.create("M3".into(), bmw.id, vec![]).await.unwrap();
    s.cars.create("Tavria Nova".into(), zaz.id, vec![]).await.unwrap();

    let by_maker = CarSearch {
        car: None,
        manufacturer: Some("BMW".into()),
    };
    assert_eq!(s.cars.search(&by_maker, all()).await.unwrap().meta.total, 2);

    let both = CarSearch {
        car: Some("x".into()),
        manufacturer: Some("bmw".into()),
    };
    let page = s.cars.search(&both, all()).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].car.model, "X5");
    assert_eq!(page.data[0].manufacturer.name, "BMW");
}

#[tokio::test]
async fn test_car_requires_existing_manufacturer() {
    let s = stores().await;
    let result = s.cars.create("Ghost".into(), Uuid::new_v4(), vec![]).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(s.cars.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_driver_search_any_name() {
    let s = stores().await;
    s.drivers
        .create(new_driver("jsmith", "John", "JON12345"))
        .await
        .unwrap();
    s.drivers
        .create(new_driver("bob", "Robert", "BOB12345"))
        .await
        .unwrap();

    let by_first_name = DriverSearch {
        driver: Some("joh".into()),
        ..Default::default()
    };
    let page = s.drivers.search(&by_first_name, all()).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].username, "jsmith");

    let by_username = DriverSearch {
        driver: Some("BO".into()),
        ..Default::default()
    };
    let page = s.drivers.search(&by_username, all()).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].first_name, "Robert");
}

#[tokio::test]
async fn test_duplicate_license_is_conflict() {
    let s = stores().await;
    let first = s
        .drivers
        .create(new_driver("first", "Ann", "ABC12345"))
        .await
        .unwrap();

    let dup = s.drivers.create(new_driver("second", "Ben", "ABC12345")).await;
    assert!(matches!(dup, Err(AppError::Conflict(_))));

    let other = s
        .drivers
        .create(new_driver("third", "Cid", "XYZ12345"))
        .await
        .unwrap();
    let taken = s
        .drivers
        .update_license(other.id, LicenseNumber::parse("ABC12345").unwrap())
        .await;
    assert!(matches!(taken, Err(AppError::Conflict(_))));

    // Re-saving your own license is fine
    let same = s
        .drivers
        .update_license(first.id, LicenseNumber::parse("ABC12345").unwrap())
        .await
        .unwrap();
    assert_eq!(same.license_number, "ABC12345");
}

#[tokio::test]
async fn test_toggle_twice_restores_state() {
    let s = stores().await;
    let (bmw, _) = seed_manufacturers(&s).await;
    let car = s.cars.create("X5".into(), bmw.id, vec![]).await.unwrap();
    let driver = s
        .drivers
        .create(new_driver("jsmith", "John", "JON12345"))
        .await
        .unwrap();

    let first = s.assignments.toggle(car.car.id, driver.id).await.unwrap();
    assert_eq!(first, Assignment::Assigned);
    assert!(s.assignments.is_assigned(car.car.id, driver.id).await.unwrap());

    let second = s.assignments.toggle(car.car.id, driver.id).await.unwrap();
    assert_eq!(second, Assignment::Unassigned);
    assert!(!s.assignments.is_assigned(car.car.id, driver.id).await.unwrap());
}

#[tokio::test]
async fn test_toggle_missing_car_is_not_found() {
    let s = stores().await;
    let driver = s
        .drivers
        .create(new_driver("jsmith", "John", "JON12345"))
        .await
        .unwrap();

    let result = s.assignments.toggle(Uuid::new_v4(), driver.id).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_assign_is_idempotent() {
    let s = stores().await;
    let (bmw, _) = seed_manufacturers(&s).await;
    let car = s.cars.create("X5".into(), bmw.id, vec![]).await.unwrap();
    let driver = s
        .drivers
        .create(new_driver("jsmith", "John", "JON12345"))
        .await
        .unwrap();

    s.assignments.assign(car.car.id, driver.id).await.unwrap();
    s.assignments.assign(car.car.id, driver.id).await.unwrap();
    assert_eq!(s.drivers.list_for_car(car.car.id).await.unwrap().len(), 1);

    s.assignments.unassign(car.car.id, driver.id).await.unwrap();
    s.assignments.unassign(car.car.id, driver.id).await.unwrap();
    assert!(s.drivers.list_for_car(car.car.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_car_update_replaces_driver_set() {
    let s = stores().await;
    let (bmw, _) = seed_manufacturers(&s).await;
    let ann = s
        .drivers
        .create(new_driver("ann", "Ann", "ANN12345"))
        .await
        .unwrap();
    let ben = s
        .drivers
        .create(new_driver("ben", "Ben", "BEN12345"))
        .await
        .unwrap();

    let car = s
        .cars
        .create("X5".into(), bmw.id, vec![ann.id, ann.id])
        .await
        .unwrap();
    assert_eq!(s.drivers.list_for_car(car.car.id).await.unwrap().len(), 1);

    s.cars
        .update(
            car.car.id,
            UpdateCar {
                driver_ids: Some(vec![ben.id]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let drivers = s.drivers.list_for_car(car.car.id).await.unwrap();
    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0].id, ben.id);
    assert_eq!(s.cars.list_for_driver(ann.id).await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_manufacturer_delete_cascades() {
    let s = stores().await;
    let (bmw, zaz) = seed_manufacturers(&s).await;
    let driver = s
        .drivers
        .create(new_driver("jsmith", "John", "JON12345"))
        .await
        .unwrap();
    s.cars.create("X5".into(), bmw.id, vec![driver.id]).await.unwrap();
    s.cars.create("Nova".into(), zaz.id, vec![driver.id]).await.unwrap();

    s.manufacturers.delete(bmw.id).await.unwrap();

    assert_eq!(s.manufacturers.count().await.unwrap(), 1);
    assert_eq!(s.cars.count().await.unwrap(), 1);
    let cars = s.cars.list_for_driver(driver.id).await.unwrap();
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].manufacturer.id, zaz.id);

    let again = s.manufacturers.delete(bmw.id).await;
    assert!(matches!(again, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_driver_delete_removes_assignments() {
    let s = stores().await;
    let (bmw, _) = seed_manufacturers(&s).await;
    let driver = s
        .drivers
        .create(new_driver("jsmith", "John", "JON12345"))
        .await
        .unwrap();
    let car = s.cars.create("X5".into(), bmw.id, vec![driver.id]).await.unwrap();

    s.drivers.delete(driver.id).await.unwrap();

    assert!(s.drivers.list_for_car(car.car.id).await.unwrap().is_empty());
    assert_eq!(s.cars.count().await.unwrap(), 1);
}
