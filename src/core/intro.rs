use crate::constants::HERO_REVEAL_STAGGER_MS;

/// Delay before the `index`-th hero element is revealed.
#[inline]
pub fn hero_reveal_delay_ms(index: usize) -> i32 {
    i32::try_from(index)
        .unwrap_or(i32::MAX)
        .saturating_mul(HERO_REVEAL_STAGGER_MS)
}
