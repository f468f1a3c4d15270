//! Full-page rendering: header, board region, intake form, page script.

use crate::state::BoardState;
use crate::views::{cards, intake};

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f4f5f7; color: #1b1f24; }
header { background: #1b1f24; color: #fff; padding: 1rem 2rem; }
header p { margin: 0; color: #9aa4af; }
main { padding: 1.5rem 2rem; display: grid; gap: 2rem; }
.card-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1rem; }
.vehicle-card { background: #fff; border-radius: 8px; padding: 1rem; box-shadow: 0 1px 3px rgba(0,0,0,0.15); }
.vehicle-card h3 { margin-top: 0; }
.vehicle-meta { color: #57606a; font-size: 0.85rem; }
.status-select { width: 100%; padding: 0.4rem; }
.loading { color: #57606a; padding: 2rem 0; }
.config-error { margin: 3rem auto; max-width: 32rem; background: #fff3f3; border: 1px solid #d33; border-radius: 8px; padding: 1.5rem; }
#intake-form { background: #fff; border-radius: 8px; padding: 1rem; max-width: 24rem; display: grid; gap: 0.6rem; }
#intake-form input, #intake-form button { padding: 0.5rem; }
"#;

const SCRIPT: &str = r#"
const board = document.getElementById('board');

const events = new EventSource('/events');
events.onmessage = (event) => {
  board.innerHTML = JSON.parse(event.data);
};
events.onerror = () => {
  console.error('board stream error');
};

board.addEventListener('change', async (event) => {
  const select = event.target;
  if (!select.classList.contains('status-select')) return;
  try {
    const response = await fetch(`/api/vehicles/${encodeURIComponent(select.dataset.id)}/status`, {
      method: 'PUT',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify({ status: select.value }),
    });
    if (!response.ok) console.error('status update failed', response.status);
  } catch (err) {
    console.error('status update failed', err);
  }
});

const form = document.getElementById('intake-form');
form.addEventListener('submit', async (event) => {
  event.preventDefault();
  const names = ['customerName', 'make', 'model', 'registration'];
  const draft = {};
  for (const name of names) draft[name] = form.elements[name].value;
  if (names.some((name) => draft[name].trim() === '')) {
    alert('Please fill in all fields');
    return;
  }
  try {
    const response = await fetch('/api/vehicles', {
      method: 'POST',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(draft),
    });
    if (response.ok) {
      form.reset();
    } else {
      console.error('intake failed', response.status);
    }
  } catch (err) {
    console.error('intake failed', err);
  }
});
"#;

/// Fixed message for the terminal `Unconfigured` state.
pub const UNCONFIGURED_MESSAGE: &str =
    "Workshop board is not configured. Set the WORKSHOP_STORE_* environment variables and restart.";

pub fn render_dashboard(board: &BoardState) -> String {
    page(
        &format!(
            r#"<main>
<section id="board">{board_html}</section>
<section class="intake">{form}</section>
</main>
<script>{script}</script>"#,
            board_html = cards::render_board(board),
            form = intake::render_intake_form(),
            script = SCRIPT,
        ),
    )
}

pub fn render_unconfigured() -> String {
    page(&format!(
        r#"<main><div class="config-error">{UNCONFIGURED_MESSAGE}</div></main>"#
    ))
}

fn page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Workshop Board</title>
<style>{styles}</style>
</head>
<body>
<header>
<h1>Workshop Service Board</h1>
<p>Vehicles currently in for service</p>
</header>
{body}
</body>
</html>"#,
        styles = STYLES,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::VehicleRecord;

    #[test]
    fn page_has_header_board_and_form_regions() {
        let html = render_dashboard(&BoardState::Ready(vec![VehicleRecord {
            id: "a".into(),
            customer_name: "Zeta".into(),
            make: "VW".into(),
            model: "Polo".into(),
            registration: "CY 1".into(),
            status: "Booked In".into(),
            service_advisor: "Busi".into(),
            estimated_completion_time: "To be confirmed".into(),
        }]));

        assert!(html.contains("Workshop Service Board"));
        assert!(html.contains(r#"<section id="board">"#));
        assert!(html.contains(r#"id="intake-form""#));
        assert!(html.contains("vehicle-card"));
    }

    #[test]
    fn loading_page_shows_spinner_and_still_offers_the_form() {
        let html = render_dashboard(&BoardState::Loading);
        assert!(html.contains("Loading vehicles"));
        // The intake form is independent of the subscription state.
        assert!(html.contains(r#"id="intake-form""#));
    }

    #[test]
    fn page_script_blocks_empty_drafts_and_clears_only_on_success() {
        let html = render_dashboard(&BoardState::Loading);
        // Blocking notice when any field is empty, clear only on an ok
        // response, leave the draft alone otherwise.
        assert!(html.contains("alert('Please fill in all fields')"));
        assert!(html.contains("form.reset()"));
    }

    #[test]
    fn unconfigured_page_shows_the_fixed_message_only() {
        let html = render_unconfigured();
        assert!(html.contains(UNCONFIGURED_MESSAGE));
        assert!(!html.contains("intake-form"));
        assert!(!html.contains("EventSource"));
    }
}
