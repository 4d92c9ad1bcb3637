//! Ordered parallel map with a bounded number of in-flight calls.
//!
//! Each batch owns its workers, index counter and result slots; nothing is
//! shared between batches.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};

/// ## Summary
/// Applies `f` to every item with at most `limit` calls in flight and returns
/// the results in input order.
///
/// `min(limit, items.len())` workers share one index counter. Each worker
/// claims the next unclaimed index, awaits `f` on that item and loops until
/// no index is left. A `limit` of zero is treated as one.
///
/// Failures are not special: whatever `f` returns for an item, including an
/// error value, lands in that item's slot and the other items still run.
pub async fn map_with_limit<'a, T, R, F, Fut>(items: &'a [T], limit: usize, f: F) -> Vec<R>
where
    F: Fn(&'a T) -> Fut,
    Fut: Future<Output = R>,
{
    if items.is_empty() {
        return Vec::new();
    }

    let next = AtomicUsize::new(0);
    let workers = limit.max(1).min(items.len());

    let claimed = futures::future::join_all((0..workers).map(|_| {
        let next = &next;
        let f = &f;
        async move {
            let mut produced = Vec::new();
            loop {
                let index = next.fetch_add(1, Ordering::Relaxed);
                let Some(item) = items.get(index) else {
                    break;
                };
                produced.push((index, f(item).await));
            }
            produced
        }
    }))
    .await;

    let mut slots: Vec<Option<R>> = std::iter::repeat_with(|| None).take(items.len()).collect();
    for (index, result) in claimed.into_iter().flatten() {
        slots[index] = Some(result);
    }
    slots.into_iter().flatten().collect()
}
