//! Vehicle list rendering.
//!
//! One card per record, in exactly the order the snapshot delivered them.
//! Ordering authority belongs to the store's subscription; nothing here
//! sorts. The stage dropdown always offers the full fixed list; a record
//! whose status matches no known stage simply gets no `selected` option.

use crate::models::vehicle::{ServiceStage, VehicleRecord};
use crate::state::BoardState;
use crate::views::escape_html;

/// The board region: a spinner until the first snapshot, the card grid after.
pub fn render_board(board: &BoardState) -> String {
    match board {
        BoardState::Loading => {
            r#"<div class="loading">Loading vehicles&hellip;</div>"#.to_string()
        }
        BoardState::Ready(records) => render_card_grid(records),
    }
}

pub fn render_card_grid(records: &[VehicleRecord]) -> String {
    let cards: String = records.iter().map(render_vehicle_card).collect();
    format!(r#"<div class="card-grid">{cards}</div>"#)
}

pub fn render_vehicle_card(record: &VehicleRecord) -> String {
    format!(
        r#"<article class="vehicle-card" data-id="{id}">
<h3>{customer}</h3>
<p class="vehicle-details">{make} {model} &middot; {registration}</p>
<p class="vehicle-meta">Advisor: {advisor} &middot; Est. completion: {eta}</p>
{select}
</article>"#,
        id = escape_html(&record.id),
        customer = escape_html(&record.customer_name),
        make = escape_html(&record.make),
        model = escape_html(&record.model),
        registration = escape_html(&record.registration),
        advisor = escape_html(&record.service_advisor),
        eta = escape_html(&record.estimated_completion_time),
        select = render_stage_select(record),
    )
}

fn render_stage_select(record: &VehicleRecord) -> String {
    let options: String = ServiceStage::ALL
        .iter()
        .map(|stage| {
            let label = escape_html(stage.as_str());
            let selected = if stage.as_str() == record.status {
                " selected"
            } else {
                ""
            };
            format!(r#"<option value="{label}"{selected}>{label}</option>"#)
        })
        .collect();

    format!(
        r#"<select class="status-select" data-id="{id}" aria-label="Service stage">{options}</select>"#,
        id = escape_html(&record.id),
    )
}
