use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use proptest::prelude::*;

use share_offer::offer::timestamp::format_timestamp;
use share_offer::offer::{
    FunnelStats, OfferEvent, OfferReason, StateDocument, UserSlot, decide, get_or_create_slot,
    load_state, record, render_state, save_state,
};

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

fn instant() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..10 * 365 * 24 * 3600).prop_map(|secs| base() + TimeDelta::seconds(secs))
}

fn event() -> impl Strategy<Value = OfferEvent> {
    prop::sample::select(OfferEvent::ALL.to_vec())
}

proptest! {
    #[test]
    fn no_history_always_offers(hours in any::<i64>(), now in instant()) {
        let decision = decide(&UserSlot::default(), hours, now);
        prop_assert!(decision.should_offer);
        prop_assert_eq!(decision.reason, OfferReason::NoHistory);
    }

    #[test]
    fn cooldown_boundary(offered in instant(), hours in 1i64..10_000) {
        let slot = UserSlot {
            last_offer_at: Some(format_timestamp(offered)),
            ..UserSlot::default()
        };
        let window = TimeDelta::hours(hours);
        let second = TimeDelta::seconds(1);

        let before = decide(&slot, hours, offered + window - second);
        prop_assert!(!before.should_offer);
        prop_assert_eq!(before.reason, OfferReason::Cooldown);

        let after = decide(&slot, hours, offered + window + second);
        prop_assert!(after.should_offer);
        prop_assert_eq!(after.reason, OfferReason::CooldownExpired);
    }

    #[test]
    fn non_positive_cooldown_never_blocks(offered in instant(), hours in i64::MIN..=0, lag in 0i64..100_000) {
        let slot = UserSlot {
            last_offer_at: Some(format_timestamp(offered)),
            ..UserSlot::default()
        };
        let decision = decide(&slot, hours, offered + TimeDelta::seconds(lag));
        prop_assert_eq!(decision.reason, OfferReason::CooldownExpired);
    }

    #[test]
    fn recorder_counts_each_event(events in prop::collection::vec(event(), 0..40), now in instant()) {
        let mut slot = UserSlot::default();
        for event in &events {
            record(&mut slot, *event, now);
        }
        let count = |wanted: OfferEvent| events.iter().filter(|e| **e == wanted).count() as u64;
        prop_assert_eq!(
            slot.stats,
            FunnelStats {
                shown: count(OfferEvent::Shown),
                accepted: count(OfferEvent::Accepted),
                declined: count(OfferEvent::Declined),
            }
        );
        prop_assert_eq!(slot.last_offer_at.is_some(), count(OfferEvent::Shown) > 0);
    }

    #[test]
    fn save_load_round_trip(
        entries in prop::collection::btree_map("[a-z0-9:_-]{1,12}", prop::collection::vec(event(), 0..6), 0..6),
        now in instant(),
    ) {
        let mut doc = StateDocument::new();
        for (user, events) in &entries {
            let slot = get_or_create_slot(&mut doc, user);
            for event in events {
                record(slot, *event, now);
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        save_state(&path, &doc).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();

        let loaded = load_state(&path);
        prop_assert_eq!(&loaded, &doc);

        save_state(&path, &loaded).unwrap();
        prop_assert_eq!(std::fs::read_to_string(&path).unwrap(), first);
        prop_assert_eq!(render_state(&loaded).unwrap(), render_state(&doc).unwrap());
    }
}
