//! Availability computation.
//!
//! Derives reserved and available quantities from a gift and its
//! reservations, and answers whether a new reservation fits.

use thiserror::Error;

use crate::models::{
    Gift, GiftFilter, GiftWithReservations, ListGiftsQuery, RegistrySummary, Reservation,
};

/// Raised when a reservation asks for more units than are left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Only {available} units available for reservation")]
pub struct InsufficientAvailability {
    pub requested: i32,
    pub available: i64,
}

/// Sum of reservation quantities.
pub fn reserved_quantity(reservations: &[Reservation]) -> i64 {
    reservations.iter().map(|r| i64::from(r.quantity)).sum()
}

/// Units still available, floored at zero.
pub fn available_quantity(quantity: i32, reserved: i64) -> i64 {
    (i64::from(quantity) - reserved).max(0)
}

/// Checks whether `requested` more units can be reserved.
pub fn ensure_available(
    quantity: i32,
    reserved: i64,
    requested: i32,
) -> Result<(), InsufficientAvailability> {
    let available = available_quantity(quantity, reserved);
    if i64::from(requested) > available {
        Err(InsufficientAvailability {
            requested,
            available,
        })
    } else {
        Ok(())
    }
}

impl GiftWithReservations {
    /// Combines a gift with the reservations that reference it.
    ///
    /// Reservations for other gifts are ignored.
    pub fn assemble<'a, I>(gift: Gift, reservations: I) -> Self
    where
        I: IntoIterator<Item = &'a Reservation>,
    {
        let reservations: Vec<Reservation> = reservations
            .into_iter()
            .filter(|r| r.gift_id == gift.id)
            .cloned()
            .collect();
        let reserved = reserved_quantity(&reservations);
        let available = available_quantity(gift.quantity, reserved);

        Self {
            gift,
            reservations,
            reserved_quantity: reserved,
            available_quantity: available,
        }
    }
}

/// Builds the derived view for every gift.
///
/// Scans the full reservation list once per gift.
pub fn build_views(gifts: Vec<Gift>, reservations: &[Reservation]) -> Vec<GiftWithReservations> {
    gifts
        .into_iter()
        .map(|gift| GiftWithReservations::assemble(gift, reservations))
        .collect()
}

impl GiftFilter {
    /// Whether a gift passes this availability filter.
    pub fn matches(&self, view: &GiftWithReservations) -> bool {
        match self {
            GiftFilter::All => true,
            GiftFilter::Available => view.available_quantity > 0,
            GiftFilter::Reserved => view.reserved_quantity > 0,
        }
    }
}

impl ListGiftsQuery {
    /// Whether a gift matches both the search term and the filter.
    ///
    /// The search is a case-insensitive substring match on name and
    /// description; an empty term matches everything.
    pub fn matches(&self, view: &GiftWithReservations) -> bool {
        self.filter.matches(view) && self.matches_search(&view.gift)
    }

    fn matches_search(&self, gift: &Gift) -> bool {
        let term = match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => term.to_lowercase(),
            _ => return true,
        };

        gift.name.to_lowercase().contains(&term)
            || gift
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&term))
    }

    /// Keeps only the gifts matching this query, preserving order.
    pub fn apply(&self, views: Vec<GiftWithReservations>) -> Vec<GiftWithReservations> {
        views.into_iter().filter(|v| self.matches(v)).collect()
    }
}

impl RegistrySummary {
    /// Aggregates the admin dashboard counts from the derived views.
    pub fn from_views(views: &[GiftWithReservations]) -> Self {
        views.iter().fold(Self::default(), |mut acc, view| {
            acc.total_gifts += 1;
            if view.reserved_quantity > 0 {
                acc.reserved_gifts += 1;
            }
            if view.available_quantity > 0 {
                acc.available_gifts += 1;
            }
            acc.total_reservations += view.reservations.len();
            acc.total_reserved_units += view.reserved_quantity;
            acc
        })
    }
}
