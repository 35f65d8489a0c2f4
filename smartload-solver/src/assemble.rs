//! Turning a winning selection into a [`LoadPlan`].

use smartload_core::{Diagnostics, LoadPlan, Order, Truck, Utilization};

use crate::solver::Selection;

/// Build the plan for `selection`, listing orders by descending payout.
pub(crate) fn assemble(truck: &Truck, orders: &[Order], selection: &Selection) -> LoadPlan {
    let capacity = truck.capacity;
    let selected_order_ids = selection
        .positions()
        .iter()
        .filter_map(|&position| orders.get(position))
        .map(|order| order.id.clone())
        .collect();

    LoadPlan {
        truck_id: truck.id.clone(),
        selected_order_ids,
        total_payout_cents: selection.payout_cents(),
        total_weight_lbs: selection.weight_lbs(),
        total_volume_cuft: selection.volume_cuft(),
        utilization_weight_percent: Utilization::from_ratio(
            selection.weight_lbs(),
            capacity.max_weight,
        ),
        utilization_volume_percent: Utilization::from_ratio(
            selection.volume_cuft(),
            capacity.max_volume,
        ),
        diagnostics: Diagnostics {
            strategy: selection.strategy(),
            candidates_considered: selection.candidates_considered(),
            candidates_filtered: selection.candidates_filtered(),
        },
    }
}
