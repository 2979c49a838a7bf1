use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// State of a single promo code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoCode {
    pub active: bool,
    /// Discount fraction in [0, 1] granted by this code.
    pub discount_value: f64,
    pub uses_left: u32,
}

/// Promo-code state keyed by code text.
///
/// Stands in for a future database table; the external layer provisions
/// it before use. Redemption is the only mutation this crate performs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromoTable {
    codes: HashMap<String, PromoCode>,
}

impl PromoTable {
    pub fn new() -> Self {
        Self {
            codes: HashMap::new(),
        }
    }

    pub fn insert(&mut self, code: impl Into<String>, promo: PromoCode) {
        self.codes.insert(code.into(), promo);
    }

    pub fn get(&self, code: &str) -> Option<&PromoCode> {
        self.codes.get(code)
    }

    /// Redeem a code against an order.
    ///
    /// Succeeds only when the code exists, is active, and has uses left;
    /// success burns exactly one use. Unknown, inactive, and exhausted
    /// codes return `false` with no mutation.
    ///
    /// The `&mut self` receiver is the concurrency contract: callers that
    /// share the table across threads must wrap it in a lock, otherwise two
    /// redemptions could both observe the last remaining use.
    pub fn redeem(&mut self, order_id: i64, code: &str) -> bool {
        let Some(promo) = self.codes.get_mut(code) else {
            tracing::debug!(order_id, code, "promo code not found");
            return false;
        };
        if !promo.active || promo.uses_left == 0 {
            tracing::debug!(
                order_id,
                code,
                active = promo.active,
                uses_left = promo.uses_left,
                "promo code rejected"
            );
            return false;
        }
        promo.uses_left -= 1;
        tracing::info!(order_id, code, uses_left = promo.uses_left, "promo code redeemed");
        true
    }
}

impl<S: Into<String>> FromIterator<(S, PromoCode)> for PromoTable {
    fn from_iter<I: IntoIterator<Item = (S, PromoCode)>>(iter: I) -> Self {
        let mut table = PromoTable::new();
        for (code, promo) in iter {
            table.insert(code, promo);
        }
        table
    }
}

/// Arguments for a redemption, decodable from caller-supplied JSON
/// via [`tixel_core::decode_args`].
#[derive(Debug, Clone, Deserialize)]
pub struct RedeemRequest {
    pub order_id: i64,
    pub promo_code: String,
}

impl RedeemRequest {
    pub fn run(&self, table: &mut PromoTable) -> bool {
        table.redeem(self.order_id, &self.promo_code)
    }
}
