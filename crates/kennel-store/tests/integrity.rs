//! Referential integrity scenarios driven through the public store API.

use std::collections::BTreeSet;

use kennel_core::{CoreError, PetDraft, PetId, UserDraft, UserId};
use kennel_store::{Store, StoreError};

fn user_draft(name: &str) -> UserDraft {
    UserDraft::new(name, format!("{name}@x.com"), 30)
}

fn not_found_user(id: u64) -> StoreError {
    StoreError::Domain(CoreError::UserNotFound(UserId::new(id)))
}

fn not_found_pet(id: u64) -> StoreError {
    StoreError::Domain(CoreError::PetNotFound(PetId::new(id)))
}

/// Checks referential integrity and aggregation consistency from the outside.
async fn assert_consistent(store: &Store) {
    let pets = store.pets().list().await.unwrap();
    let users = store.users().list().await.unwrap();

    for pet in &pets {
        store
            .users()
            .get(pet.user_id)
            .await
            .unwrap_or_else(|e| panic!("pet {} has no owner: {e}", pet.id));
    }

    for user in &users {
        let expected: BTreeSet<PetId> = pets
            .iter()
            .filter(|p| p.user_id == user.id)
            .map(|p| p.id)
            .collect();
        let listed: Vec<PetId> = user.pet_ids();
        let actual: BTreeSet<PetId> = listed.iter().copied().collect();
        assert_eq!(listed.len(), actual.len(), "duplicate pets on user {}", user.id);
        assert_eq!(expected, actual, "pet list drift on user {}", user.id);
    }

    store.verify().await.unwrap();
}

#[tokio::test]
async fn test_create_pet_then_delete_owner() {
    let store = Store::new();

    let alice = store
        .users()
        .create(UserDraft::new("alice", "a@x.com", 30))
        .await
        .unwrap();
    assert_eq!(alice.id, UserId::new(1));

    let rex = store
        .pets()
        .create(PetDraft::new("Rex", alice.id))
        .await
        .unwrap();
    assert_eq!(rex.id, PetId::new(1));
    assert_eq!(store.users().get(alice.id).await.unwrap().pets, vec![rex.clone()]);

    assert_eq!(store.users().delete(alice.id).await.unwrap(), 1);
    assert_eq!(store.users().get(alice.id).await.unwrap_err(), not_found_user(1));
    assert_eq!(store.pets().get(rex.id).await.unwrap_err(), not_found_pet(1));
    assert_consistent(&store).await;
}

#[tokio::test]
async fn test_create_pet_for_missing_owner() {
    let store = Store::new();

    let err = store
        .pets()
        .create(PetDraft::new("Ghost", UserId::new(999)))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        StoreError::Domain(CoreError::OwnerNotFound(UserId::new(999)))
    );
    assert!(store.pets().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_transfer_pet_between_users() {
    let store = Store::new();
    let a = store.users().create(user_draft("a")).await.unwrap();
    let b = store.users().create(user_draft("b")).await.unwrap();
    assert_eq!((a.id, b.id), (UserId::new(1), UserId::new(2)));

    let pet = store
        .pets()
        .create(PetDraft::new("Rex", a.id))
        .await
        .unwrap();

    store
        .pets()
        .update(pet.id, PetDraft::new("Rex", b.id))
        .await
        .unwrap();

    let moved = store.pets().get(pet.id).await.unwrap();
    assert_eq!(moved.user_id, b.id);
    assert!(store.users().get(a.id).await.unwrap().pets.is_empty());
    assert_eq!(store.users().get(b.id).await.unwrap().pets, vec![moved]);
    assert_consistent(&store).await;
}

#[tokio::test]
async fn test_transfer_to_same_owner_keeps_membership() {
    let store = Store::new();
    let owner = store.users().create(user_draft("owner")).await.unwrap();
    for name in ["a", "b", "c"] {
        store
            .pets()
            .create(PetDraft::new(name, owner.id))
            .await
            .unwrap();
    }
    let before: BTreeSet<PetId> = store
        .users()
        .get(owner.id)
        .await
        .unwrap()
        .pet_ids()
        .into_iter()
        .collect();

    store
        .pets()
        .update(PetId::new(2), PetDraft::new("b", owner.id))
        .await
        .unwrap();

    let after = store.users().get(owner.id).await.unwrap().pet_ids();
    assert_eq!(after.len(), 3);
    assert_eq!(before, after.into_iter().collect());
    assert_consistent(&store).await;
}

#[tokio::test]
async fn test_ids_are_distinct_and_increasing() {
    let store = Store::new();
    let owner = store.users().create(user_draft("owner")).await.unwrap();

    let mut user_ids = vec![owner.id];
    for n in 0..20 {
        let user = store
            .users()
            .create(user_draft(&format!("u{n}")))
            .await
            .unwrap();
        user_ids.push(user.id);
    }
    assert!(user_ids.windows(2).all(|w| w[0] < w[1]));

    let mut pet_ids = Vec::new();
    for n in 0..20 {
        let pet = store
            .pets()
            .create(PetDraft::new(format!("p{n}"), owner.id))
            .await
            .unwrap();
        pet_ids.push(pet.id);
    }
    assert!(pet_ids.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(pet_ids.first(), Some(&PetId::new(1)));
}

#[tokio::test]
async fn test_cascade_leaves_other_users_alone() {
    let store = Store::new();
    let doomed = store.users().create(user_draft("doomed")).await.unwrap();
    let survivor = store.users().create(user_draft("survivor")).await.unwrap();

    for n in 0..5 {
        let owner = if n % 2 == 0 { doomed.id } else { survivor.id };
        store
            .pets()
            .create(PetDraft::new(format!("p{n}"), owner))
            .await
            .unwrap();
    }

    assert_eq!(store.users().delete(doomed.id).await.unwrap(), 3);

    let remaining = store.pets().list().await.unwrap();
    assert_eq!(remaining.len(), 2);
    assert!(remaining.iter().all(|p| p.user_id == survivor.id));
    assert_eq!(store.users().get(survivor.id).await.unwrap().pets.len(), 2);
    assert_consistent(&store).await;
}

#[tokio::test]
async fn test_delete_all_for_user_keeps_user() {
    let store = Store::new();
    let owner = store.users().create(user_draft("owner")).await.unwrap();
    for name in ["a", "b"] {
        store
            .pets()
            .create(PetDraft::new(name, owner.id))
            .await
            .unwrap();
    }

    assert_eq!(store.pets().delete_all_for_user(owner.id).await.unwrap(), 2);
    assert!(store.users().get(owner.id).await.unwrap().pets.is_empty());
    assert_consistent(&store).await;
}

#[tokio::test]
async fn test_failed_operations_leave_no_trace() {
    let store = Store::new();
    let owner = store.users().create(user_draft("owner")).await.unwrap();
    let pet = store
        .pets()
        .create(PetDraft::new("Rex", owner.id))
        .await
        .unwrap();

    assert!(store
        .pets()
        .update(pet.id, PetDraft::new("Rex", UserId::new(77)))
        .await
        .is_err());
    assert!(store
        .users()
        .update(owner.id, user_draft("owner").with_pets(vec![PetId::new(50)]))
        .await
        .is_err());
    assert!(store.users().delete(UserId::new(77)).await.is_err());
    assert!(store.pets().delete(PetId::new(50)).await.is_err());

    assert_eq!(store.pets().get(pet.id).await.unwrap(), pet);
    assert_eq!(store.users().get(owner.id).await.unwrap().pets, vec![pet]);
    assert_consistent(&store).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_mutations_stay_consistent() {
    let store = Store::new();
    let mut owners = Vec::new();
    for n in 0..4 {
        owners.push(
            store
                .users()
                .create(user_draft(&format!("owner{n}")))
                .await
                .unwrap()
                .id,
        );
    }

    let mut tasks = Vec::new();
    for worker in 0..8u64 {
        let store = store.clone();
        let owners = owners.clone();
        tasks.push(tokio::spawn(async move {
            for step in 0..25u64 {
                let owner = owners[((worker + step) % owners.len() as u64) as usize];
                let created = store
                    .pets()
                    .create(PetDraft::new(format!("w{worker}s{step}"), owner))
                    .await;
                if let Ok(pet) = created {
                    let next = owners[((worker + step + 1) % owners.len() as u64) as usize];
                    let _ = store.pets().update(pet.id, PetDraft::new("moved", next)).await;
                    if step % 3 == 0 {
                        let _ = store.pets().delete(pet.id).await;
                    }
                }
            }
        }));
    }

    let doomed = owners[0];
    tasks.push(tokio::spawn({
        let store = store.clone();
        async move {
            let _ = store.users().delete(doomed).await;
        }
    }));

    for task in tasks {
        task.await.unwrap();
    }

    assert_consistent(&store).await;
}
