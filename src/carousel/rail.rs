//! Pure scroll-arena math for the infinite carousel.
//!
//! Offsets are measured in terminal cell columns but kept as `f32` so
//! glide animation can move in sub-cell increments. Nothing in here knows
//! about time, ticks, or rendering; callers inject offsets and read back
//! decisions, which keeps the wraparound invariants testable without a
//! real viewport.

/// Sub-cell tolerance guarding boundary checks against float jitter.
///
/// Without it, a teleport that lands exactly on a threshold could
/// re-trigger on the next scroll event and thrash back and forth.
const EPS: f32 = 0.25;

/// Scroll state for one carousel instance.
///
/// The physical sequence laid out in the scroll range is
/// `tail-clones + originals + head-clones`: the last `clone_count`
/// originals repeated in front, then the `n` originals, then the first
/// `clone_count` repeated behind. Clones are presentation duplicates of an
/// original index, not distinct items.
#[derive(Clone, Debug)]
pub struct Rail {
    /// Logical item count.
    n: usize,
    /// Requested per-side clone padding.
    clones: usize,
    /// Cell width of one item including its trailing gap; 0 before layout.
    snap: f32,
    /// Cell width of the item itself.
    item_width: f32,
    /// Visible viewport width in cells; 0 before layout.
    rail_width: f32,
    /// Current physical scroll offset of the viewport's left edge.
    offset: f32,
    /// Set while a teleport waits for its next-frame release; suppresses
    /// further boundary checks so the programmatic offset write cannot
    /// re-trigger itself.
    teleport_hold: bool,
    laid_out: bool,
}

impl Rail {
    /// Create an unmeasured rail. Navigation is a no-op until
    /// [`Rail::layout`] has run with real dimensions.
    pub fn new(n: usize, clones: usize) -> Self {
        Self {
            n: n.max(1),
            clones: clones.max(1),
            snap: 0.0,
            item_width: 0.0,
            rail_width: 0.0,
            offset: 0.0,
            teleport_hold: false,
            laid_out: false,
        }
    }

    /// Logical item count.
    pub const fn n(&self) -> usize {
        self.n
    }

    /// Effective per-side clone count: the requested padding clamped to at
    /// most `n`, so tiny item sets degrade to fewer clones instead of
    /// repeating items more than once per side.
    pub const fn clone_count(&self) -> usize {
        if self.clones < self.n { self.clones } else { self.n }
    }

    /// Number of physical slots mounted in the scroll range.
    pub const fn physical_len(&self) -> usize {
        self.n + 2 * self.clone_count()
    }

    /// Snap width (item + gap) in cells; 0 before layout.
    pub const fn snap(&self) -> f32 {
        self.snap
    }

    /// Measured card width in cells; 0 before layout.
    pub const fn item_width(&self) -> f32 {
        self.item_width
    }

    /// Measured viewport width in cells; 0 before layout.
    pub const fn rail_width(&self) -> f32 {
        self.rail_width
    }

    /// Current raw scroll offset.
    pub const fn offset(&self) -> f32 {
        self.offset
    }

    /// Whether real dimensions are known yet.
    pub const fn is_ready(&self) -> bool {
        self.laid_out && self.snap > 0.0 && self.rail_width > 0.0
    }

    /// Whether a teleport is waiting for its release step.
    pub const fn teleport_in_flight(&self) -> bool {
        self.teleport_hold
    }

    /// What: Record (or re-record) measured dimensions.
    ///
    /// Inputs:
    /// - `item_width`: card width in cells
    /// - `gap`: spacing between cards in cells
    /// - `rail_width`: visible viewport width in cells
    ///
    /// Output: none.
    ///
    /// Details:
    /// - First layout anchors the viewport on logical index 0 without
    ///   animation.
    /// - Later layouts (terminal resize) preserve the focused logical index
    ///   by re-anchoring it under the new dimensions, again without
    ///   animation.
    /// - Degenerate dimensions (zero width) leave the rail unready and
    ///   navigation stays a no-op.
    pub fn layout(&mut self, item_width: f32, gap: f32, rail_width: f32) {
        if item_width <= 0.0 || rail_width <= 0.0 {
            self.laid_out = false;
            self.snap = 0.0;
            self.rail_width = 0.0;
            return;
        }
        let keep = if self.is_ready() { self.logical_index() } else { 0 };
        self.item_width = item_width;
        self.snap = item_width + gap.max(0.0);
        self.rail_width = rail_width;
        self.laid_out = true;
        self.anchor(keep);
    }

    /// Horizontal inset that centers the active card in the viewport.
    fn center_inset(&self) -> f32 {
        ((self.rail_width - self.item_width) / 2.0).max(0.0)
    }

    /// Raw offset that centers the given physical slot.
    pub fn target_offset_for_slot(&self, slot: usize) -> f32 {
        let slot = slot as f32;
        self.snap.mul_add(slot, -self.center_inset())
    }

    /// Continuous physical slot currently centered in the viewport.
    fn centered_slot_f(&self) -> f32 {
        if self.snap <= 0.0 {
            return 0.0;
        }
        (self.offset + self.center_inset()) / self.snap
    }

    /// Nearest snapped physical slot.
    pub fn nearest_slot(&self) -> usize {
        let max = self.physical_len().saturating_sub(1);
        let slot = self.centered_slot_f().round();
        if slot <= 0.0 { 0 } else { (slot as usize).min(max) }
    }

    /// What: Map a physical slot to the logical item it renders.
    ///
    /// Inputs:
    /// - `slot`: physical slot in `[0, physical_len)`
    ///
    /// Output:
    /// - Logical index in `[0, n)`; clone slots map to the original they
    ///   duplicate, which is exactly why wraparound is invisible.
    pub fn slot_item(&self, slot: usize) -> usize {
        let c = self.clone_count() as isize;
        let n = self.n as isize;
        let raw = slot as isize - c;
        (((raw % n) + n) % n) as usize
    }

    /// Logical index currently centered, always in `[0, n)`.
    pub fn logical_index(&self) -> usize {
        self.slot_item(self.nearest_slot())
    }

    /// Physical slot of a logical index inside the originals region.
    pub const fn home_slot(&self, logical: usize) -> usize {
        self.clone_count() + logical
    }

    /// What: Write a raw scroll offset (user drag / programmatic).
    ///
    /// Inputs:
    /// - `raw`: requested offset in cells
    ///
    /// Output: none.
    ///
    /// Details:
    /// - Clamps to the physical scroll range the way a real scroll
    ///   container clamps `scrollLeft`, so a fast fling cannot escape the
    ///   arena before the boundary check sees it.
    pub fn set_offset(&mut self, raw: f32) {
        if !self.is_ready() {
            return;
        }
        let min = self.target_offset_for_slot(0);
        let max = self.target_offset_for_slot(self.physical_len() - 1);
        self.offset = raw.clamp(min, max);
    }

    /// Scroll by a delta in cells.
    pub fn scroll_by(&mut self, delta: f32) {
        let next = self.offset + delta;
        self.set_offset(next);
    }

    /// What: Apply a boundary teleport when the viewport has drifted past
    /// either threshold.
    ///
    /// Inputs: none (reads the current offset).
    ///
    /// Output:
    /// - `Some(jump_cells)` when a teleport fired (the raw offset moved by
    ///   exactly `±n × snap`); `None` otherwise.
    ///
    /// Details:
    /// - Thresholds sit one slot short of each physical edge, leaving the
    ///   outermost clone slot as slack; an [`EPS`] tolerance stops float
    ///   jitter from re-triggering on the landing offset.
    /// - While a previous teleport holds (awaiting its release on the next
    ///   frame) the check is suppressed, making the operation re-entrant
    ///   safe: the programmatic offset write never cascades.
    /// - Free-drag teleports need two or more effective clones per side;
    ///   with a single clone the landing zone would overlap the opposite
    ///   threshold. Step navigation handles that shape via its own
    ///   pre-step teleport instead.
    pub fn boundary_teleport(&mut self) -> Option<f32> {
        if !self.is_ready() || self.teleport_hold || self.clone_count() < 2 {
            return None;
        }
        let slot_f = self.centered_slot_f();
        let low = 1.0;
        let high = (self.physical_len() - 2) as f32;
        let revolution = self.snap * self.n as f32;
        let jump = if slot_f < low - EPS / self.snap {
            revolution
        } else if slot_f > high + EPS / self.snap {
            -revolution
        } else {
            return None;
        };
        self.offset += jump;
        self.teleport_hold = true;
        Some(jump)
    }

    /// Release a held teleport; the caller defers this to the next frame,
    /// which restores normal boundary checking (the "re-enable snapping"
    /// step of the jump).
    pub fn release_teleport(&mut self) {
        self.teleport_hold = false;
    }

    /// What: Instant, non-animated jump centering a logical index.
    ///
    /// Inputs:
    /// - `logical`: index in `[0, n)` (wrapped if out of range)
    ///
    /// Output: none.
    ///
    /// Details:
    /// - Used on first layout (anchor logical 0), resize (preserve focus),
    ///   and as the invisible half of a pre-step teleport.
    pub fn anchor(&mut self, logical: usize) {
        if !self.is_ready() {
            return;
        }
        let slot = self.home_slot(logical % self.n);
        self.offset = self.target_offset_for_slot(slot);
    }

    /// What: Compute the animated scroll target for a single step.
    ///
    /// Inputs:
    /// - `from_slot`: slot the step starts from (the current glide target
    ///   when one is mid-flight, else the nearest slot)
    /// - `direction`: `-1` or `+1`
    ///
    /// Output:
    /// - The slot to animate to. When the step would cross into the far
    ///   clone buffer, the rail first teleports invisibly by one logical
    ///   revolution so the animated step happens in the middle of the
    ///   arena; the user perceives one smooth transition either way.
    pub fn pre_step(&mut self, from_slot: usize, direction: i32) -> Option<usize> {
        if !self.is_ready() {
            return None;
        }
        let c = self.clone_count() as isize;
        let n = self.n as isize;
        let mut slot = from_slot as isize;
        let target = slot + direction.signum() as isize;
        if direction > 0 && target >= c + n {
            // About to run off the right edge of the originals: relocate one
            // revolution left, then step.
            slot -= n;
            self.offset -= self.snap * self.n as f32;
        } else if direction < 0 && target < c {
            slot += n;
            self.offset += self.snap * self.n as f32;
        }
        let stepped = slot + direction.signum() as isize;
        debug_assert!(stepped >= 0 && stepped < self.physical_len() as isize);
        Some(stepped.max(0) as usize)
    }
}
