//! Record sink - the claim/commit contract against the shared buffer
//!
//! The shared circular buffer is an external collaborator; this module
//! defines only its producer-facing contract plus the guard that makes the
//! commit unconditional. A claimed slot that is never committed leaks the
//! buffer's space accounting permanently - later producers starve and the
//! consumer stalls on that slot forever - so committing an under-written
//! record is always preferred over not committing at all.

pub mod mem;

/// An ephemeral claim on a region of the shared buffer
///
/// Exists only between claim and commit; the region is exclusively owned by
/// the claiming thread for that window.
#[derive(Debug)]
pub struct Claim<'a> {
    offset: i32,
    region: &'a mut [u8],
}

impl<'a> Claim<'a> {
    /// Create a claim over an exclusively owned region
    pub fn new(offset: i32, region: &'a mut [u8]) -> Self {
        Self { offset, region }
    }

    /// Offset handed back to `commit`
    #[inline]
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// The claimed destination region
    #[inline]
    pub fn region_mut(&mut self) -> &mut [u8] {
        self.region
    }
}

/// Producer-facing contract of the shared circular buffer
///
/// Implementations must never block: a refused claim returns `None`
/// immediately (capacity, contention, oversized - all one unified drop
/// outcome). `commit` must be called exactly once per successful claim;
/// [`CommitGuard`] enforces that for the capture path.
pub trait RecordSink: Send + Sync {
    /// Attempt to claim `length` bytes for a record of `type_id`
    fn try_claim(&self, type_id: i32, length: usize) -> Option<Claim<'_>>;

    /// Finalize a previously claimed region, making it consumer-visible
    fn commit(&self, offset: i32);
}

/// Scoped claim with guaranteed commit
///
/// Commits on drop, so the claim is finalized on every exit path from the
/// encoding step - including a panicking encoder. The possibly malformed
/// record is left for the consumer to detect; the space accounting stays
/// intact.
pub struct CommitGuard<'a, S: RecordSink + ?Sized> {
    sink: &'a S,
    claim: Claim<'a>,
}

impl<'a, S: RecordSink + ?Sized> CommitGuard<'a, S> {
    /// Wrap a successful claim
    pub fn new(sink: &'a S, claim: Claim<'a>) -> Self {
        Self { sink, claim }
    }

    /// The claimed destination region
    #[inline]
    pub fn region_mut(&mut self) -> &mut [u8] {
        self.claim.region_mut()
    }
}

impl<S: RecordSink + ?Sized> Drop for CommitGuard<'_, S> {
    fn drop(&mut self) {
        self.sink.commit(self.claim.offset());
    }
}
