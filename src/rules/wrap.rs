//! Scene wrap bonus distribution.

/// Split wrap bonus dice over a card's roles.
///
/// Roles are ranked highest first (ties keep card order). Dice, already
/// sorted highest first, are dealt one per role round-robin until none are
/// left. Returns each role's total, indexed in card order. Every role gets a
/// share whether or not anyone holds it.
///
/// ```
/// use deadwood::rules::distribute_bonus;
///
/// // Ranks 2, 4, 3 on the card; five dice.
/// let shares = distribute_bonus(&[6, 5, 4, 2, 1], &[2, 4, 3]);
/// assert_eq!(shares, vec![4, 6 + 2, 5 + 1]);
/// ```
#[must_use]
pub fn distribute_bonus(dice: &[u8], role_ranks: &[u8]) -> Vec<u32> {
    let mut shares = vec![0u32; role_ranks.len()];
    if role_ranks.is_empty() {
        return shares;
    }

    let mut order: Vec<usize> = (0..role_ranks.len()).collect();
    order.sort_by(|&a, &b| role_ranks[b].cmp(&role_ranks[a]));

    for (die, &role) in dice.iter().zip(order.iter().cycle()) {
        shares[role] += u32::from(*die);
    }
    shares
}
