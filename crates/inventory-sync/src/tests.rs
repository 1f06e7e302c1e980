//! Engine Tests
//!
//! Exercises the projector, sync store, and mutation gateway against an
//! in-memory collection double that mimics the realtime store: writes mutate
//! a key/value tree and every mutation re-delivers the whole collection to
//! the registered watcher.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::client::{
        CollectionClient, ErrorCallback, RemoteError, SnapshotMap, Subscription, ValueCallback,
    };
    use crate::domain::{Condition, EquipmentDraft, EquipmentRecord, InventoryError};
    use crate::mutation::{MutationGateway, SubmitState};
    use crate::projection::{project, ListControls};
    use crate::sync::{SyncEvent, SyncStore};

    #[derive(Default)]
    struct MockState {
        entries: Vec<(String, Value)>,
        watcher: Option<(ValueCallback, ErrorCallback)>,
        next_key: u32,
        push_calls: u32,
        write_calls: u32,
        remove_calls: u32,
        fail_writes: bool,
        active_watches: u32,
    }

    /// In-memory stand-in for the realtime database
    #[derive(Clone, Default)]
    struct MockCollection {
        state: Rc<RefCell<MockState>>,
    }

    impl MockCollection {
        fn with_entries(entries: &[(&str, Value)]) -> Self {
            let mock = Self::default();
            mock.state.borrow_mut().entries = entries
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect();
            mock
        }

        fn failing_writes() -> Self {
            let mock = Self::default();
            mock.state.borrow_mut().fail_writes = true;
            mock
        }

        /// Re-deliver the whole collection, the way the transport does.
        fn notify(&self) {
            let payload = {
                let state = self.state.borrow();
                if state.entries.is_empty() {
                    None
                } else {
                    Some(state.entries.clone())
                }
            };
            let watcher = self.state.borrow_mut().watcher.take();
            if let Some((on_value, on_error)) = watcher {
                on_value(payload);
                self.state.borrow_mut().watcher = Some((on_value, on_error));
            }
        }

        /// Report a transport-level subscription failure.
        fn fail(&self, message: &str) {
            let watcher = self.state.borrow_mut().watcher.take();
            if let Some((on_value, on_error)) = watcher {
                on_error(message.to_string());
                self.state.borrow_mut().watcher = Some((on_value, on_error));
            }
        }

        fn push_calls(&self) -> u32 {
            self.state.borrow().push_calls
        }

        fn write_calls(&self) -> u32 {
            self.state.borrow().write_calls
        }

        fn remove_calls(&self) -> u32 {
            self.state.borrow().remove_calls
        }

        fn active_watches(&self) -> u32 {
            self.state.borrow().active_watches
        }

        fn entry(&self, key: &str) -> Option<Value> {
            self.state
                .borrow()
                .entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        }
    }

    #[async_trait(?Send)]
    impl CollectionClient for MockCollection {
        fn watch(
            &self,
            _path: &str,
            on_value: ValueCallback,
            on_error: ErrorCallback,
        ) -> Subscription {
            {
                let mut state = self.state.borrow_mut();
                state.watcher = Some((on_value, on_error));
                state.active_watches += 1;
            }
            // the real SDK delivers the current value right away
            self.notify();
            let state = Rc::clone(&self.state);
            Subscription::new(move || {
                let mut state = state.borrow_mut();
                state.watcher = None;
                state.active_watches -= 1;
            })
        }

        async fn push(&self, _path: &str) -> Result<String, RemoteError> {
            let mut state = self.state.borrow_mut();
            state.push_calls += 1;
            state.next_key += 1;
            Ok(format!("key-{}", state.next_key))
        }

        async fn write(&self, path: &str, value: Value) -> Result<(), RemoteError> {
            {
                let mut state = self.state.borrow_mut();
                state.write_calls += 1;
                if state.fail_writes {
                    return Err(RemoteError("permission denied".into()));
                }
                let id = child_key(path);
                if let Some(entry) = state.entries.iter_mut().find(|(k, _)| *k == id) {
                    entry.1 = value;
                } else {
                    state.entries.push((id, value));
                }
            }
            self.notify();
            Ok(())
        }

        async fn remove(&self, path: &str) -> Result<(), RemoteError> {
            {
                let mut state = self.state.borrow_mut();
                state.remove_calls += 1;
                if state.fail_writes {
                    return Err(RemoteError("permission denied".into()));
                }
                let id = child_key(path);
                state.entries.retain(|(k, _)| *k != id);
            }
            self.notify();
            Ok(())
        }
    }

    fn child_key(path: &str) -> String {
        path.rsplit('/').next().unwrap().to_string()
    }

    fn entry_value(name: &str) -> Value {
        json!({
            "objectDisplayName": name,
            "condition": "Good",
            "partNumber": "TR-ATT-001",
            "description": "",
        })
    }

    fn record(id: &str, name: &str) -> EquipmentRecord {
        EquipmentRecord {
            id: id.to_string(),
            display_name: name.to_string(),
            condition: Condition::Good,
            part_number: "TR-ATT-001".to_string(),
            description: String::new(),
        }
    }

    fn draft(name: &str) -> EquipmentDraft {
        EquipmentDraft {
            display_name: name.to_string(),
            condition: "Good".to_string(),
            part_number: "TR-ATT-001".to_string(),
            description: String::new(),
        }
    }

    /// Attach a sync store and collect everything it emits.
    fn attach_collecting(
        mock: &MockCollection,
    ) -> (SyncStore, Rc<RefCell<Vec<SyncEvent>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let store = SyncStore::attach(mock, "equipment", move |event| {
            sink.borrow_mut().push(event);
        });
        (store, events)
    }

    fn last_snapshot(events: &Rc<RefCell<Vec<SyncEvent>>>) -> Vec<EquipmentRecord> {
        events
            .borrow()
            .iter()
            .rev()
            .find_map(|event| match event {
                SyncEvent::Snapshot(records) => Some(records.clone()),
                SyncEvent::Lost(_) => None,
            })
            .expect("no snapshot delivered")
    }

    // ========================
    // View Projector
    // ========================

    #[test]
    fn empty_query_returns_everything() {
        let records = vec![record("a", "Pump"), record("b", "Valve"), record("c", "Hose")];

        let projection = project(&records, "", 1, 10);

        assert_eq!(projection.total_filtered, records.len());
        assert_eq!(projection.page_items, records);
        assert_eq!(projection.total_pages, 1);
    }

    #[test]
    fn whitespace_query_is_no_filter() {
        let records = vec![record("a", "Pump"), record("b", "Valve")];

        let projection = project(&records, "   ", 1, 10);

        assert_eq!(projection.total_filtered, 2);
    }

    #[test]
    fn filter_is_case_insensitive_substring_on_display_name() {
        let records = vec![
            record("a", "Hydraulic Pump"),
            record("b", "Valve"),
            record("c", "PUMP SEAL"),
        ];

        let projection = project(&records, "pump", 1, 10);

        let ids: Vec<&str> = projection.page_items.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn filtered_items_preserve_mirror_order() {
        let records: Vec<EquipmentRecord> = (0..20)
            .map(|i| record(&format!("id-{i}"), &format!("Pump {i}")))
            .collect();

        let projection = project(&records, "pump", 2, 7);

        // sub-sequence of the input in original relative order
        let mut cursor = 0;
        for item in &projection.page_items {
            let pos = records[cursor..]
                .iter()
                .position(|r| r.id == item.id)
                .expect("item not found in order");
            cursor += pos + 1;
        }
    }

    #[test]
    fn twelve_matches_paginate_to_two_pages() {
        let mut records: Vec<EquipmentRecord> = (0..12)
            .map(|i| record(&format!("p{i}"), &format!("Pump {i}")))
            .collect();
        records.push(record("x", "Valve"));
        records.push(record("y", "Hose"));
        records.push(record("z", "Filter"));

        let page_one = project(&records, "pump", 1, 10);
        assert_eq!(page_one.total_filtered, 12);
        assert_eq!(page_one.page_items.len(), 10);
        assert_eq!(page_one.total_pages, 2);
        assert_eq!(page_one.page_start, 0);
        assert_eq!(page_one.page_end, 10);

        let page_two = project(&records, "pump", 2, 10);
        assert_eq!(page_two.page_items.len(), 2);
        assert_eq!(page_two.page_start, 10);
        assert_eq!(page_two.page_end, 12);
    }

    #[test]
    fn empty_mirror_projects_to_nothing() {
        let projection = project(&[], "anything", 3, 10);

        assert!(projection.page_items.is_empty());
        assert_eq!(projection.total_pages, 0);
        assert_eq!(projection.total_filtered, 0);
    }

    #[test]
    fn out_of_range_page_yields_empty_page() {
        let records = vec![record("a", "Pump")];

        let projection = project(&records, "", 5, 10);

        assert!(projection.page_items.is_empty());
        assert_eq!(projection.total_filtered, 1);
        assert_eq!(projection.total_pages, 1);
    }

    #[test]
    fn projection_is_deterministic() {
        let records = vec![record("a", "Pump"), record("b", "Valve")];

        let first = project(&records, "p", 1, 1);
        let second = project(&records, "p", 1, 1);

        assert_eq!(first, second);
    }

    #[test]
    fn page_size_is_a_real_parameter() {
        let records: Vec<EquipmentRecord> = (0..5)
            .map(|i| record(&format!("id-{i}"), "Pump"))
            .collect();

        let projection = project(&records, "", 2, 2);

        assert_eq!(projection.total_pages, 3);
        assert_eq!(projection.page_items.len(), 2);
        assert_eq!(projection.page_start, 2);
    }

    #[test]
    fn changing_the_query_resets_the_page() {
        let mut controls = ListControls::default();
        controls.set_page(4);
        assert_eq!(controls.page, 4);

        controls.set_query("pump");
        assert_eq!(controls.page, 1);
        assert_eq!(controls.query, "pump");
    }

    #[test]
    fn page_clamps_when_the_mirror_shrinks() {
        let mut controls = ListControls::default();
        controls.set_page(4);

        controls.clamp_to(2);
        assert_eq!(controls.page, 2);

        // an empty result implies no valid page; leave the control alone
        controls.clamp_to(0);
        assert_eq!(controls.page, 2);

        controls.set_page(0);
        assert_eq!(controls.page, 1);
    }

    // ========================
    // Sync Store
    // ========================

    #[test]
    fn absent_collection_delivers_an_empty_snapshot() {
        let mock = MockCollection::default();

        let (_store, events) = attach_collecting(&mock);

        assert_eq!(*events.borrow(), vec![SyncEvent::Snapshot(Vec::new())]);
    }

    #[test]
    fn snapshot_keys_become_ids_in_enumeration_order() {
        let mock = MockCollection::with_entries(&[
            ("b-key", entry_value("Valve")),
            ("a-key", entry_value("Pump")),
        ]);

        let (_store, events) = attach_collecting(&mock);

        let snapshot = last_snapshot(&events);
        let ids: Vec<&str> = snapshot.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b-key", "a-key"]);
        assert_eq!(snapshot[1].display_name, "Pump");
    }

    #[test]
    fn malformed_entries_are_dropped_individually() {
        let mock = MockCollection::with_entries(&[
            ("good", entry_value("Pump")),
            ("free-text", json!({"objectDisplayName": "Old", "condition": "rusty but fine", "partNumber": "P-2"})),
            ("not-even-a-record", json!("boom")),
        ]);

        let (_store, events) = attach_collecting(&mock);

        let snapshot = last_snapshot(&events);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, "good");
    }

    #[test]
    fn transport_failure_surfaces_as_an_error_event() {
        let mock = MockCollection::default();
        let (_store, events) = attach_collecting(&mock);
        events.borrow_mut().clear();

        mock.fail("connection reset");

        let delivered = events.borrow();
        assert_eq!(delivered.len(), 1);
        match &delivered[0] {
            SyncEvent::Lost(InventoryError::Subscription(message)) => {
                assert_eq!(message, "connection reset");
            }
            other => panic!("expected a Lost event, got {other:?}"),
        }
    }

    #[test]
    fn detach_stops_delivery_and_is_idempotent() {
        let mock = MockCollection::with_entries(&[("a", entry_value("Pump"))]);
        let (mut store, events) = attach_collecting(&mock);
        assert_eq!(mock.active_watches(), 1);

        store.detach();
        store.detach();
        assert_eq!(mock.active_watches(), 0);
        assert!(!store.is_attached());

        events.borrow_mut().clear();
        mock.notify();
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn dropping_the_store_releases_the_watch() {
        let mock = MockCollection::default();
        {
            let (_store, _events) = attach_collecting(&mock);
            assert_eq!(mock.active_watches(), 1);
        }
        assert_eq!(mock.active_watches(), 0);
    }

    // ========================
    // Mutation Gateway
    // ========================

    #[tokio::test]
    async fn create_with_missing_fields_never_touches_the_network() {
        let mock = MockCollection::default();
        let gateway = MutationGateway::new(Rc::new(mock.clone()), "equipment");

        let mut missing_name = draft("Pump");
        missing_name.display_name = String::new();
        let mut missing_condition = draft("Pump");
        missing_condition.condition = String::new();
        let mut missing_part = draft("Pump");
        missing_part.part_number = "  ".to_string();

        for bad in [missing_name, missing_condition, missing_part] {
            let err = gateway.create(&bad).await.unwrap_err();
            assert!(matches!(err, InventoryError::Validation(_)), "{err:?}");
        }
        assert_eq!(mock.push_calls(), 0);
        assert_eq!(mock.write_calls(), 0);
    }

    #[tokio::test]
    async fn unknown_condition_fails_validation() {
        let mock = MockCollection::default();
        let gateway = MutationGateway::new(Rc::new(mock.clone()), "equipment");

        let mut bad = draft("Pump");
        bad.condition = "Rusty".to_string();

        let err = gateway.create(&bad).await.unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));
        assert_eq!(mock.push_calls(), 0);
    }

    #[tokio::test]
    async fn create_pushes_then_writes_under_the_new_key() {
        let mock = MockCollection::default();
        let gateway = MutationGateway::new(Rc::new(mock.clone()), "equipment");

        let key = gateway.create(&draft("Attachment")).await.unwrap();

        assert_eq!(key, "key-1");
        assert_eq!(mock.push_calls(), 1);
        assert_eq!(mock.write_calls(), 1);
        let stored = mock.entry("key-1").unwrap();
        assert_eq!(stored["objectDisplayName"], "Attachment");
        assert_eq!(stored["condition"], "Good");
    }

    #[tokio::test]
    async fn create_surfaces_remote_failures() {
        let mock = MockCollection::failing_writes();
        let gateway = MutationGateway::new(Rc::new(mock.clone()), "equipment");

        let err = gateway.create(&draft("Pump")).await.unwrap_err();

        assert!(matches!(err, InventoryError::RemoteWrite(_)), "{err:?}");
    }

    #[tokio::test]
    async fn update_validates_and_targets_the_record_path() {
        let mock = MockCollection::with_entries(&[("abc", entry_value("Pump"))]);
        let gateway = MutationGateway::new(Rc::new(mock.clone()), "equipment");

        let mut edited = draft("Pump Mk II");
        edited.condition = "Maintenance".to_string();
        gateway.update("abc", &edited).await.unwrap();

        let stored = mock.entry("abc").unwrap();
        assert_eq!(stored["objectDisplayName"], "Pump Mk II");
        assert_eq!(stored["condition"], "Maintenance");

        let mut invalid = draft("Pump");
        invalid.display_name = String::new();
        let err = gateway.update("abc", &invalid).await.unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));
    }

    #[tokio::test]
    async fn delete_needs_no_field_validation() {
        let mock = MockCollection::with_entries(&[("abc", entry_value("Pump"))]);
        let gateway = MutationGateway::new(Rc::new(mock.clone()), "equipment");

        gateway.delete("abc").await.unwrap();

        assert_eq!(mock.remove_calls(), 1);
        assert!(mock.entry("abc").is_none());
    }

    #[test]
    fn submit_state_gates_reentrancy() {
        let mut state = SubmitState::default();
        assert_eq!(state, SubmitState::Idle);
        assert!(!state.in_flight());

        assert!(state.begin());
        assert!(state.in_flight());
        // a second submit while in flight is refused
        assert!(!state.begin());
        assert_eq!(state, SubmitState::Submitting);

        state.finish(true);
        assert_eq!(state, SubmitState::Succeeded);
        assert!(state.begin());

        state.finish(false);
        assert_eq!(state, SubmitState::Failed);
        assert!(state.begin());
    }

    // ========================
    // End to end: mutations become visible only through the subscription
    // ========================

    #[tokio::test]
    async fn created_record_arrives_via_the_next_snapshot() {
        let mock = MockCollection::default();
        let (_store, events) = attach_collecting(&mock);
        let gateway = MutationGateway::new(Rc::new(mock.clone()), "equipment");

        let key = gateway.create(&draft("Attachment")).await.unwrap();

        let snapshot = last_snapshot(&events);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, key);
        assert_eq!(snapshot[0].display_name, "Attachment");
    }

    #[tokio::test]
    async fn deleted_record_is_gone_from_the_next_snapshot() {
        let mock = MockCollection::with_entries(&[
            ("keep", entry_value("Valve")),
            ("doomed", entry_value("Pump")),
        ]);
        let (_store, events) = attach_collecting(&mock);
        let gateway = MutationGateway::new(Rc::new(mock.clone()), "equipment");

        gateway.delete("doomed").await.unwrap();

        let snapshot = last_snapshot(&events);
        assert!(snapshot.iter().all(|r| r.id != "doomed"));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, "keep");
    }
}
