//! Parallel evaluation of many model instances

use log::debug;
use rayon::prelude::*;

use crate::Result;
use crate::model::PoseRequest;

/// Evaluate pose requests in parallel
///
/// Every request owns its cache, so no locking is involved. The first
/// failing request's error is returned; caches of other requests may or
/// may not have been written by then.
pub fn evaluate_all(requests: &mut [PoseRequest<'_>]) -> Result<()> {
    debug!(
        "Evaluating {} pose request(s) on {} thread(s)",
        requests.len(),
        rayon::current_num_threads()
    );

    requests
        .par_iter_mut()
        .try_for_each(|request| request.evaluate())
}

/// Evaluate pose requests in parallel, collecting each request's result
pub fn evaluate_each(requests: &mut [PoseRequest<'_>]) -> Vec<Result<()>> {
    requests
        .par_iter_mut()
        .map(|request| request.evaluate())
        .collect()
}
