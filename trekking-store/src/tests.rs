// SPDX-License-Identifier: MIT OR Apache-2.0

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use trekking_core::Group;

use crate::{GroupStore, StoreError, assert_all_stores};

fn group_with(name: &str, participants: &[&str]) -> Group {
    let mut group = Group::new(name);
    for participant in participants {
        group.add_participant(*participant).unwrap();
    }
    group
}

#[tokio::test]
async fn create_and_fetch() {
    assert_all_stores!(|store| async {
        let group = group_with("family", &["anna", "bram"]);
        store.create(&group).await.unwrap();
        assert_eq!(store.fetch("family").await.unwrap(), group);
    });
}

#[tokio::test]
async fn create_twice() {
    assert_all_stores!(|store| async {
        store.create(&group_with("x", &["anna"])).await.unwrap();

        assert!(matches!(
            store.create(&Group::new("x")).await,
            Err(StoreError::AlreadyExists(name)) if name == "x"
        ));

        // The first group is still in place.
        assert_eq!(store.fetch("x").await.unwrap().participants(), ["anna"]);
    });
}

#[tokio::test]
async fn fetch_missing() {
    assert_all_stores!(|store| async {
        assert!(matches!(
            store.fetch("missing").await,
            Err(StoreError::NotFound(name)) if name == "missing"
        ));
    });
}

#[tokio::test]
async fn update_roster_and_draw() {
    assert_all_stores!(|store| async {
        store.create(&Group::new("family")).await.unwrap();

        let mut group = store.fetch("family").await.unwrap();
        for participant in ["a", "b", "c", "d"] {
            group.add_participant(participant).unwrap();
        }
        group.remove_participant("c").unwrap();
        store.update(&group).await.unwrap();
        assert_eq!(
            store.fetch("family").await.unwrap().participants(),
            ["a", "b", "d"]
        );

        let mut group = store.fetch("family").await.unwrap();
        group.draw(&mut ChaCha20Rng::seed_from_u64(1)).unwrap();
        store.update(&group).await.unwrap();

        let stored = store.fetch("family").await.unwrap();
        assert!(stored.is_drawn());
        assert_eq!(stored, group);
        for participant in ["a", "b", "d"] {
            assert_eq!(
                stored.recipient(participant).unwrap(),
                group.recipient(participant).unwrap()
            );
        }
    });
}

#[tokio::test]
async fn last_write_wins() {
    assert_all_stores!(|store| async {
        store.create(&Group::new("family")).await.unwrap();

        let mut first = store.fetch("family").await.unwrap();
        let mut second = store.fetch("family").await.unwrap();

        first.add_participant("anna").unwrap();
        second.add_participant("bram").unwrap();

        store.update(&first).await.unwrap();
        store.update(&second).await.unwrap();

        // The update of "anna" got silently overwritten.
        assert_eq!(store.fetch("family").await.unwrap().participants(), ["bram"]);
    });
}

#[tokio::test]
async fn names_and_summaries() {
    assert_all_stores!(|store| async {
        assert!(store.names().await.unwrap().is_empty());
        assert!(store.summaries().await.unwrap().is_empty());

        let mut drawn = group_with("office", &["anna", "bram", "cees"]);
        drawn.draw(&mut ChaCha20Rng::seed_from_u64(2)).unwrap();
        store.create(&drawn).await.unwrap();
        store.create(&Group::new("family")).await.unwrap();
        store.create(&Group::new("book club")).await.unwrap();

        let names: Vec<String> = store.names().await.unwrap().into_iter().collect();
        assert_eq!(names, ["book club", "family", "office"]);

        assert_eq!(
            store.summaries().await.unwrap(),
            [
                "book club".to_string(),
                "family".to_string(),
                format!("{:>30} drawn", "office"),
            ]
        );
    });
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_create() {
    assert_all_stores!(|store| async {
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let mut group = Group::new("x");
                group.add_participant(format!("creator-{i}")).unwrap();
                store.create(&group).await
            }));
        }

        let mut created = 0;
        let mut rejected = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => created += 1,
                Err(StoreError::AlreadyExists(_)) => rejected += 1,
                Err(err) => panic!("unexpected error: {err}"),
            }
        }

        assert_eq!(created, 1);
        assert_eq!(rejected, 31);
        assert_eq!(store.names().await.unwrap().len(), 1);
    });
}

#[tokio::test]
async fn drawn_group_survives_roundtrip_for_every_participant() {
    assert_all_stores!(|store| async {
        let mut group = group_with("family", &["a", "b", "c", "d"]);
        group.draw(&mut ChaCha20Rng::seed_from_u64(3)).unwrap();
        store.create(&group).await.unwrap();

        let stored = store.fetch("family").await.unwrap();
        let mut recipients: Vec<&str> = ["a", "b", "c", "d"]
            .iter()
            .map(|participant| {
                let recipient = stored.recipient(participant).unwrap();
                assert_ne!(recipient, *participant);
                recipient
            })
            .collect();
        recipients.sort();
        assert_eq!(recipients, ["a", "b", "c", "d"]);
    });
}
