//! The end-to-end scenarios, written once and run against any [`Harness`].
//!
//! Each scenario gets its own key and fixtures; nothing is shared between
//! them and nothing is cleaned up afterwards.

use crate::common::{Harness, MISSING_PET_ID, photo_path};
use petfriends_e2e::fixtures::ensure_own_pet;
use petfriends_e2e::models::PetList;
use petfriends_e2e::{AuthKey, PetFields, PetFilter};
use pretty_assertions::assert_eq;

/// Expands to one `#[tokio::test]` per scenario, each building a fresh
/// harness with `$setup` and carrying the optional extra attribute.
macro_rules! scenario_tests {
    (setup = $setup:path) => {
        scenario_tests!(@list [@emit $setup]);
    };
    (setup = $setup:path, attr = #[$attr:meta]) => {
        scenario_tests!(@list [@emit $setup, #[$attr]]);
    };
    (@list [$($prefix:tt)*]) => {
        scenario_tests!($($prefix)*;
            get_api_key_for_valid_user,
            get_all_pets_with_valid_key,
            add_new_pet_with_valid_data,
            successful_delete_self_pet,
            successful_update_self_pet_info,
            successful_create_pet_simple,
            set_photo_on_pet_by_id,
            no_auth_key_for_invalid_password,
            no_auth_key_for_invalid_email,
            no_pets_shown_for_unauthorized_user,
            required_fields_for_adding_new_pet,
            unsuccessful_delete_pet_for_unauthorized_user,
            error_400_for_updating_not_existing_pet,
            error_500_for_set_photo_on_not_existing_pet,
            create_pet_simple_with_empty_name_and_large_age
        );
    };
    (@emit $setup:path; $($name:ident),+) => {
        $(
            #[tokio::test]
            async fn $name() {
                let harness = $setup().await;
                scenarios::$name(&harness).await;
            }
        )+
    };
    (@emit $setup:path, #[$attr:meta]; $($name:ident),+) => {
        $(
            #[tokio::test]
            #[$attr]
            async fn $name() {
                let harness = $setup().await;
                scenarios::$name(&harness).await;
            }
        )+
    };
}

pub async fn get_api_key_for_valid_user(h: &Harness) {
    let creds = h.config.valid_credentials();

    let response = h
        .client
        .get_api_key(&creds.email, &creds.password)
        .await
        .unwrap();

    assert_eq!(response.status_code(), 200);
    assert!(response.has_field("key"), "body: {}", response.body);
}

pub async fn get_all_pets_with_valid_key(h: &Harness) {
    let auth_key = h.login().await;
    // The global listing includes our own pets, so owning one guarantees it
    // is not empty.
    ensure_own_pet(&h.client, &auth_key).await.unwrap();

    let response = h
        .client
        .get_list_of_pets(&auth_key, PetFilter::All)
        .await
        .unwrap();

    assert_eq!(response.status_code(), 200);
    assert!(!response.pets().unwrap().is_empty());
}

pub async fn add_new_pet_with_valid_data(h: &Harness) {
    let auth_key = h.login().await;
    let fields = PetFields::new("Барбоскин", "двортерьер", "5");

    let response = h
        .client
        .add_new_pet(&auth_key, &fields, &photo_path())
        .await
        .unwrap();

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.str_field("name"), Some(fields.name));
}

pub async fn successful_delete_self_pet(h: &Harness) {
    let auth_key = h.login().await;
    let pet = ensure_own_pet(&h.client, &auth_key).await.unwrap();

    let response = h.client.delete_pet(&auth_key, &pet.id).await.unwrap();

    let my_pets: PetList = h
        .client
        .get_list_of_pets(&auth_key, PetFilter::MyPets)
        .await
        .unwrap()
        .decode()
        .unwrap();

    assert_eq!(response.status_code(), 200);
    assert!(
        !my_pets.contains_id(&pet.id),
        "deleted pet {} is still listed",
        pet.id
    );
}

pub async fn successful_update_self_pet_info(h: &Harness) {
    let auth_key = h.login().await;
    let pet = ensure_own_pet(&h.client, &auth_key).await.unwrap();
    let fields = PetFields::new("Мурзик", "Котэ", 5);

    let response = h
        .client
        .update_pet_info(&auth_key, &pet.id, &fields)
        .await
        .unwrap();

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.str_field("name"), Some(fields.name));
}

pub async fn successful_create_pet_simple(h: &Harness) {
    let auth_key = h.login().await;
    let fields = PetFields::new("Pushok", "cat", "3");

    let response = h
        .client
        .create_pet_simple(&auth_key, &fields)
        .await
        .unwrap();

    assert_eq!(response.status_code(), 200);
    assert!(response.has_field("id"));
    assert_eq!(response.str_field("name"), Some(fields.name));
    assert_eq!(response.str_field("age"), Some(fields.age));
    assert_eq!(response.str_field("animal_type"), Some(fields.animal_type));
}

pub async fn set_photo_on_pet_by_id(h: &Harness) {
    let auth_key = h.login().await;
    let pet = ensure_own_pet(&h.client, &auth_key).await.unwrap();

    let response = h
        .client
        .set_photo_by_pet_id(&auth_key, &pet.id, &photo_path())
        .await
        .unwrap();

    assert_eq!(response.status_code(), 200);
    assert!(!response.has_field("error"), "body: {}", response.body);
}

pub async fn no_auth_key_for_invalid_password(h: &Harness) {
    let creds = h.config.wrong_password_credentials();

    let response = h
        .client
        .get_api_key(&creds.email, &creds.password)
        .await
        .unwrap();

    assert_eq!(response.status_code(), 403);
    assert!(!response.has_field("key"));
}

pub async fn no_auth_key_for_invalid_email(h: &Harness) {
    let creds = h.config.wrong_email_credentials();

    let response = h
        .client
        .get_api_key(&creds.email, &creds.password)
        .await
        .unwrap();

    assert_eq!(response.status_code(), 403);
    assert!(!response.has_field("key"));
}

pub async fn no_pets_shown_for_unauthorized_user(h: &Harness) {
    let response = h
        .client
        .get_list_of_pets(&AuthKey::empty(), PetFilter::All)
        .await
        .unwrap();

    assert_eq!(response.status_code(), 403);
    assert!(!response.has_field("pets"));
}

pub async fn required_fields_for_adding_new_pet(h: &Harness) {
    let auth_key = h.login().await;
    let fields = PetFields::new("", "", "");

    let response = h
        .client
        .add_new_pet(&auth_key, &fields, &photo_path())
        .await
        .unwrap();

    assert_eq!(response.status_code(), 200);
}

pub async fn unsuccessful_delete_pet_for_unauthorized_user(h: &Harness) {
    let auth_key = h.login().await;
    let created = h
        .client
        .add_new_pet(
            &auth_key,
            &PetFields::new("Васька", "кот", "4"),
            &photo_path(),
        )
        .await
        .unwrap();
    let pet_id = created.str_field("id").expect("created pet has no id");

    let response = h.client.delete_pet(&AuthKey::empty(), &pet_id).await.unwrap();

    assert_eq!(response.status_code(), 403);
}

pub async fn error_400_for_updating_not_existing_pet(h: &Harness) {
    let auth_key = h.login().await;

    let response = h
        .client
        .update_pet_info(&auth_key, MISSING_PET_ID, &PetFields::new("", "", -1))
        .await
        .unwrap();

    assert_eq!(response.status_code(), 400);
}

pub async fn error_500_for_set_photo_on_not_existing_pet(h: &Harness) {
    let auth_key = h.login().await;

    let response = h
        .client
        .set_photo_by_pet_id(&auth_key, MISSING_PET_ID, &photo_path())
        .await
        .unwrap();

    assert_eq!(response.status_code(), 500);
}

pub async fn create_pet_simple_with_empty_name_and_large_age(h: &Harness) {
    let auth_key = h.login().await;
    let fields = PetFields::new("", "неизвестно", "987654");

    let response = h
        .client
        .create_pet_simple(&auth_key, &fields)
        .await
        .unwrap();

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.str_field("name"), Some(fields.name));
    assert_eq!(response.str_field("animal_type"), Some(fields.animal_type));
    assert_eq!(response.str_field("age"), Some(fields.age));
}
