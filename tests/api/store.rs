use quickcheck::{Arbitrary, Gen};

use fengai::domain::RecordId;
use fengai::model::{SubscriptionFields, Subscriptions};
use fengai::store::{MemoryStorage, RecordStore};

/// A user action against the subscriptions collection.
/// Indexes are taken modulo the collection length when applied.
#[derive(Debug, Clone)]
enum Op {
    Create { name: String, price: u16 },
    Update { index: usize, price: u16 },
    Delete { index: usize },
}

impl Arbitrary for Op {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        match u8::arbitrary(g) % 4 {
            0 | 1 => Op::Create {
                name: String::arbitrary(g),
                price: u16::arbitrary(g),
            },
            2 => Op::Update {
                index: usize::arbitrary(g),
                price: u16::arbitrary(g),
            },
            _ => Op::Delete {
                index: usize::arbitrary(g),
            },
        }
    }
}

/// Apply `op` to both the store and a plain list model; false if their results disagree
fn apply(
    store: &mut RecordStore<MemoryStorage>,
    model: &mut Vec<(RecordId, SubscriptionFields)>,
    op: Op,
) -> bool {
    let missing: RecordId = "no-such-record".into();

    match op {
        Op::Create { name, price } => {
            let fields = SubscriptionFields {
                name: Some(name),
                price: Some(price.into()),
                ..Default::default()
            };
            let record = store.create::<Subscriptions>(fields.clone());
            model.push((record.sys.id, fields));
            true
        }
        Op::Update { price, .. } if model.is_empty() => {
            let patch = SubscriptionFields {
                price: Some(price.into()),
                ..Default::default()
            };
            store.update::<Subscriptions>(&missing, patch).is_none()
        }
        Op::Update { index, price } => {
            let index = index % model.len();
            let patch = SubscriptionFields {
                price: Some(price.into()),
                ..Default::default()
            };
            let updated = store.update::<Subscriptions>(&model[index].0, patch);
            model[index].1.price = Some(price.into());
            updated.map_or(false, |record| record.fields.data == model[index].1)
        }
        Op::Delete { .. } if model.is_empty() => !store.delete::<Subscriptions>(&missing),
        Op::Delete { index } => {
            let index = index % model.len();
            let (id, _) = model.remove(index);
            store.delete::<Subscriptions>(&id)
        }
    }
}

#[quickcheck_macros::quickcheck]
fn store_behaves_like_an_ordered_list(ops: Vec<Op>) -> bool {
    let mut store = RecordStore::new(MemoryStorage::new());
    let mut model = Vec::new();

    for op in ops {
        if !apply(&mut store, &mut model, op) {
            return false;
        }
    }

    let listed: Vec<_> = store
        .list::<Subscriptions>()
        .into_iter()
        .map(|record| (record.sys.id, record.fields.data))
        .collect();
    listed == model
}

#[quickcheck_macros::quickcheck]
fn created_records_keep_their_timestamps(names: Vec<String>) -> bool {
    let mut store = RecordStore::new(MemoryStorage::new());

    let created: Vec<_> = names
        .into_iter()
        .map(|name| {
            store.create::<Subscriptions>(SubscriptionFields {
                name: Some(name),
                ..Default::default()
            })
        })
        .collect();

    created.iter().all(|record| {
        record.fields.created_at.is_some() && record.fields.created_at == record.fields.updated_at
    }) && store.list::<Subscriptions>() == created
}
