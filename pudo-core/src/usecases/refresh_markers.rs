use crate::{
    directory::{DirectoryError, DirectorySearch, PudoDirectory, SearchQuery},
    map::MapAdapter,
    session::MapSession,
};

/// What started a refresh cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshTrigger {
    /// The visitor panned or zoomed the map.
    ViewportChanged,
    /// The visitor submitted a postal code.
    PostalCode(String),
}

/// A refresh cycle between its prune and merge phases, while the directory
/// lookup is pending.
///
/// Holding a cycle does not block newer ones: if another cycle begins in
/// the meantime, completing this one yields [`RefreshOutcome::Superseded`]
/// and merges nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshCycle {
    generation: u64,
    query: SearchQuery,
    recenter_on_result: bool,
}

impl RefreshCycle {
    /// The lookup the host must run against the directory.
    #[must_use]
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }
}

/// Terminal state of one refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Results were merged into the registry.
    Merged { added: usize, recentered: bool },
    /// The directory reported `VALIDATION` or `NOT_FOUND`: nothing was
    /// merged and nothing removed. The host surfaces the user-visible
    /// message.
    NothingFound,
    /// A newer cycle began while the lookup was pending; the result was
    /// discarded unmerged.
    Superseded,
}

/// Prune phase. Captures the current viewport, removes every marker that
/// fell outside it (registry and map layer in the same pass) and stamps the
/// cycle with a fresh generation.
pub fn begin_refresh<M>(session: &mut MapSession, map: &mut M, trigger: RefreshTrigger) -> RefreshCycle
where
    M: MapAdapter,
{
    let viewport = map.viewport();
    let removed = session.registry.prune_outside(&viewport.bounds);
    for pos in &removed {
        map.remove_marker(*pos);
    }
    if !removed.is_empty() {
        log::debug!("Pruned {} off-screen markers", removed.len());
    }

    session.generation += 1;
    let radius_km = session.config().radius_km;
    let (query, recenter_on_result) = match trigger {
        RefreshTrigger::ViewportChanged => (
            SearchQuery::Nearby {
                center: viewport.center,
                radius_km,
            },
            false,
        ),
        RefreshTrigger::PostalCode(code) => (SearchQuery::PostalCode { code, radius_km }, true),
    };
    RefreshCycle {
        generation: session.generation,
        query,
        recenter_on_result,
    }
}

/// Merge phase. Applies the directory's answer unless the cycle was
/// superseded: new coordinates become markers, duplicates are skipped, and
/// a non-empty postal-code result flies the viewport to its first hit.
pub fn complete_refresh<M>(
    session: &mut MapSession,
    map: &mut M,
    cycle: RefreshCycle,
    found: DirectorySearch,
) -> RefreshOutcome
where
    M: MapAdapter,
{
    if cycle.generation != session.generation {
        log::debug!(
            "Discarding lookup result of superseded refresh cycle #{}",
            cycle.generation
        );
        return RefreshOutcome::Superseded;
    }

    let items = match found {
        DirectorySearch::Found(items) => items,
        DirectorySearch::NoMatch => return RefreshOutcome::NothingFound,
    };

    let mut added = 0;
    for pudo in &items {
        if session.registry.add(pudo.pos) {
            map.add_marker(pudo);
            added += 1;
        }
    }

    let recentered = cycle.recenter_on_result && !items.is_empty();
    if recentered {
        let config = session.config();
        map.fly_to(items[0].pos, config.fly_zoom, config.fly_duration_secs);
    }

    RefreshOutcome::Merged { added, recentered }
}

/// One full refresh cycle: prune, query, merge, optional re-center.
///
/// Fails after the prune phase if the lookup fails; the registry keeps its
/// post-prune state and the merge simply does not run.
pub async fn refresh_markers<M, D>(
    session: &mut MapSession,
    map: &mut M,
    directory: &D,
    trigger: RefreshTrigger,
) -> Result<RefreshOutcome, DirectoryError>
where
    M: MapAdapter,
    D: PudoDirectory,
{
    let cycle = begin_refresh(session, map, trigger);
    let found = directory.search(cycle.query()).await?;
    Ok(complete_refresh(session, map, cycle, found))
}
