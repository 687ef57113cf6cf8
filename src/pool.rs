use crate::context::Id;
use log::warn;

// Retained widget state (container geometry, expanded tree nodes) lives in
// small fixed pools keyed by widget id. A slot remembers the frame it was
// last touched; lookup is a linear scan and replacement evicts the least
// recently updated slot. Presence alone can carry meaning: a tree node is
// expanded iff its id currently occupies a slot.
#[derive(Clone, Copy, Default, Debug)]
pub struct PoolItem {
    pub id: Option<Id>,
    pub last_update: u32,
}

pub fn pool_get(items: &[PoolItem], id: Id) -> Option<usize> {
    items.iter().position(|it| it.id == Some(id))
}

// Claims the least recently updated slot (ties go to the lowest index). If
// every slot was already touched on `frame` the oldest one is evicted anyway;
// whatever state it carried is lost, which shows up as a window forgetting
// its position rather than a crash.
pub fn pool_init(items: &mut [PoolItem], frame: u32, id: Id) -> usize {
    let mut n = 0;
    for i in 1..items.len() {
        if items[i].last_update < items[n].last_update {
            n = i;
        }
    }
    if items[n].id.is_some() && items[n].last_update == frame {
        warn!("pool exhausted on frame {}, evicting {:?}", frame, items[n].id);
    }
    items[n].id = Some(id);
    items[n].last_update = frame;
    n
}

pub fn pool_update(items: &mut [PoolItem], frame: u32, idx: usize) {
    items[idx].last_update = frame;
}
