//! Fixed-size worker pool for per-frame tile jobs.
//!
//! Built once per renderer and reused for every frame. Jobs are pushed onto
//! rayon's shared queue, and [`WorkerPool::run`] returns only after all of
//! them have finished.

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::RenderResult;

pub struct WorkerPool {
    pool: ThreadPool,
}

impl WorkerPool {
    /// Start `threads` workers. Zero means one per available hardware thread.
    pub fn new(threads: usize) -> RenderResult<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("lumen-worker-{i}"))
            .build()?;

        log::info!("Started {} render workers", pool.current_num_threads());
        Ok(Self { pool })
    }

    /// Number of worker threads.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run every job on the pool and block until all have completed.
    ///
    /// Results come back in job order, whatever order the jobs finished in.
    pub fn run<J, R>(&self, jobs: Vec<J>) -> Vec<R>
    where
        J: FnOnce() -> R + Send,
        R: Send + Default,
    {
        let mut results: Vec<R> = std::iter::repeat_with(R::default).take(jobs.len()).collect();

        self.pool.scope(|scope| {
            for (job, slot) in jobs.into_iter().zip(results.iter_mut()) {
                scope.spawn(move |_| *slot = job());
            }
        });

        results
    }

    /// Run `op` inside the pool so rayon parallel iterators use these workers.
    pub fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_pool_size() {
        let pool = WorkerPool::new(3).unwrap();
        assert_eq!(pool.threads(), 3);
    }

    #[test]
    fn test_results_in_job_order() {
        let pool = WorkerPool::new(4).unwrap();
        let jobs: Vec<_> = (0..32u64)
            .map(|i| {
                move || {
                    // Make later jobs finish first
                    std::thread::sleep(std::time::Duration::from_micros(32 - i));
                    i * i
                }
            })
            .collect();

        let results = pool.run(jobs);
        assert_eq!(results, (0..32u64).map(|i| i * i).collect::<Vec<_>>());
    }

    #[test]
    fn test_run_joins_all_jobs() {
        let pool = WorkerPool::new(2).unwrap();
        let done = AtomicUsize::new(0);
        let counter = &done;

        for _ in 0..3 {
            let jobs: Vec<_> = (0..10)
                .map(|_| {
                    move || {
                        counter.fetch_add(1, Ordering::SeqCst);
                    }
                })
                .collect();
            pool.run(jobs);
        }

        assert_eq!(done.load(Ordering::SeqCst), 30);
    }

    #[test]
    fn test_jobs_write_disjoint_slices() {
        let pool = WorkerPool::new(4).unwrap();
        let mut buffer = vec![0u32; 100];

        let jobs: Vec<_> = buffer
            .chunks_mut(7)
            .enumerate()
            .map(|(i, chunk)| {
                move || {
                    chunk.fill(i as u32);
                }
            })
            .collect();
        pool.run(jobs);

        for (i, value) in buffer.iter().enumerate() {
            assert_eq!(*value, (i / 7) as u32);
        }
    }
}
