use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};

use super::*;
use crate::reconcile::ResultSource;

const SETTLE: Duration = Duration::from_secs(2);

fn fruit() -> Vec<SelectOption<i64>> {
	vec![SelectOption::new(1, "Apple"), SelectOption::new(2, "Banana")]
}

fn values(select: &Select<i64>) -> Vec<i64> {
	select.visible().options.iter().map(|option| option.value).collect()
}

fn recorder() -> (Rc<RefCell<Vec<i64>>>, impl FnMut(i64) + 'static) {
	let calls = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&calls);
	(calls, move |value| sink.borrow_mut().push(value))
}

fn category_search(query: &str) -> Result<Vec<SelectOption<i64>>> {
	if query == "cat" {
		Ok(vec![SelectOption::new(9, "Category A")])
	} else {
		Ok(Vec::new())
	}
}

#[test]
fn empty_query_shows_all_options_in_order() {
	let mut select = Select::new(fruit());
	select.open(Instant::now());
	assert_eq!(values(&select), vec![1, 2]);
	assert_eq!(select.visible().source, ResultSource::Static);
}

#[test]
fn typing_filters_static_options() {
	let now = Instant::now();
	let mut select = Select::new(fruit());
	select.open(now);
	select.set_query("an", now);
	assert_eq!(values(&select), vec![2]);

	select.set_query("AN", now);
	assert_eq!(values(&select), vec![2]);
}

#[test]
fn keystrokes_inside_window_trigger_one_search_with_final_query() {
	let seen = Arc::new(Mutex::new(Vec::new()));
	let log = Arc::clone(&seen);
	let provider = move |query: &str| -> Result<Vec<SelectOption<i64>>> {
		log.lock().unwrap().push(query.to_string());
		Ok(Vec::new())
	};
	let start = Instant::now();
	let mut select = Select::builder().options(fruit()).dynamic_search(provider).build();
	select.open(start);

	for (offset, text) in [(0, "c"), (100, "ca"), (200, "cat")] {
		let at = start + Duration::from_millis(offset);
		select.set_query(text, at);
		select.tick(at);
	}
	select.tick(start + Duration::from_millis(450));
	assert_eq!(select.state(), SelectState::OpenIdle);
	select.tick(start + Duration::from_millis(500));
	assert!(select.wait_for_search(SETTLE));
	select.tick(start + Duration::from_secs(2));

	assert_eq!(*seen.lock().unwrap(), vec!["cat".to_string()]);
}

#[test]
fn selecting_notifies_once_and_resets() {
	let now = Instant::now();
	let (calls, on_change) = recorder();
	let mut select = Select::builder().options(fruit()).on_change(on_change).build();
	select.open(now);
	select.set_query("ban", now);

	assert!(select.commit_highlighted());

	assert_eq!(*calls.borrow(), vec![2]);
	assert_eq!(select.state(), SelectState::Closed);
	assert_eq!(select.query(), "");
}

#[test]
fn selection_does_not_mutate_the_controlled_value() {
	let now = Instant::now();
	let mut select = Select::builder().options(fruit()).value(Some(1)).build();
	select.open(now);
	select.select(2);
	assert_eq!(select.value(), Some(&1));

	select.set_value(Some(2));
	assert_eq!(select.selected_label(), Some("Banana"));
}

#[test]
fn outside_click_keeps_query_and_skips_notification() {
	let now = Instant::now();
	let (calls, on_change) = recorder();
	let mut select = Select::builder().options(fruit()).on_change(on_change).build();
	select.open(now);
	select.set_query("app", now);

	select.dismiss();

	assert_eq!(select.state(), SelectState::Closed);
	assert_eq!(select.query(), "app");
	assert!(calls.borrow().is_empty());

	select.open(now);
	assert_eq!(values(&select), vec![1]);
}

#[test]
fn failed_search_falls_back_to_static_filter() {
	let failing = |_: &str| -> Result<Vec<SelectOption<i64>>> { Err(anyhow!("503")) };
	let start = Instant::now();
	let mut select = Select::builder().options(fruit()).dynamic_search(failing).build();
	select.open(start);
	select.set_query("ban", start);
	select.tick(start + select.debounce_window());
	assert!(select.wait_for_search(SETTLE));

	let view = select.visible();
	assert_eq!(view.source, ResultSource::StaticFallback);
	assert!(!view.loading);
	assert_eq!(values(&select), vec![2]);
	assert_eq!(select.state(), SelectState::OpenIdle);
}

#[test]
fn dynamic_results_replace_static_list() {
	let start = Instant::now();
	let mut select = Select::builder()
		.options(fruit())
		.dynamic_search(category_search)
		.build();
	select.open(start);
	select.set_query("cat", start);

	select.tick(start + Duration::from_millis(299));
	assert_eq!(select.state(), SelectState::OpenIdle);
	select.tick(start + Duration::from_millis(300));
	assert!(select.wait_for_search(SETTLE));

	let view = select.visible();
	assert_eq!(view.source, ResultSource::Dynamic);
	assert!(!view.loading);
	assert_eq!(view.options.len(), 1);
	assert_eq!(view.options[0].value, 9);
	assert_eq!(view.options[0].label, "Category A");
}

#[test]
fn picking_a_dynamic_result_keeps_its_label() {
	let start = Instant::now();
	let (calls, on_change) = recorder();
	let mut select = Select::builder()
		.options(fruit())
		.dynamic_search(category_search)
		.on_change(on_change)
		.build();
	select.open(start);
	select.set_query("cat", start);
	select.tick(start + Duration::from_millis(300));
	assert!(select.wait_for_search(SETTLE));

	assert!(select.commit_highlighted());
	assert_eq!(*calls.borrow(), vec![9]);
	assert!(select.dynamic_results().is_empty());

	select.set_value(Some(9));
	assert_eq!(select.selected_label(), Some("Category A"));
}

#[test]
fn disabled_select_stays_closed() {
	let mut select = Select::builder().options(fruit()).disabled(true).build();
	select.toggle(Instant::now());
	assert_eq!(select.state(), SelectState::Closed);
}

#[test]
fn dynamic_flag_without_provider_filters_statically() {
	let start = Instant::now();
	let queries = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&queries);
	let mut select = Select::builder()
		.options(fruit())
		.enable_dynamic_search(true)
		.on_query_change(move |query| sink.borrow_mut().push(query.to_string()))
		.build();
	select.open(start);
	select.set_query("app", start);
	select.tick(start + Duration::from_millis(300));

	assert_eq!(select.state(), SelectState::OpenIdle);
	assert_eq!(select.visible().source, ResultSource::Static);
	assert_eq!(values(&select), vec![1]);
	assert_eq!(*queries.borrow(), vec!["app".to_string()]);
}

#[test]
fn settled_query_is_reported_separately_from_selection() {
	let start = Instant::now();
	let queries = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&queries);
	let (calls, on_change) = recorder();
	let mut select = Select::builder()
		.options(fruit())
		.dynamic_search(category_search)
		.on_change(on_change)
		.on_query_change(move |query| sink.borrow_mut().push(query.to_string()))
		.build();
	select.open(start);
	select.set_query("cat", start);
	select.tick(start + Duration::from_millis(300));

	assert_eq!(*queries.borrow(), vec!["cat".to_string()]);
	assert!(calls.borrow().is_empty());
}

#[test]
fn dismissing_discards_in_flight_search() {
	let slow = |query: &str| -> Result<Vec<SelectOption<i64>>> {
		std::thread::sleep(Duration::from_millis(50));
		Ok(vec![SelectOption::new(7, query)])
	};
	let start = Instant::now();
	let mut select = Select::builder().options(fruit()).dynamic_search(slow).build();
	select.open(start);
	select.set_query("late", start);
	select.tick(start + Duration::from_millis(300));
	assert_eq!(select.state(), SelectState::OpenSearching);

	select.dismiss();
	std::thread::sleep(Duration::from_millis(150));
	select.tick(start + Duration::from_secs(1));

	assert!(select.dynamic_results().is_empty());
	assert_eq!(select.query(), "late");
}

#[test]
fn dropping_mid_search_ignores_the_late_result() {
	let (done_tx, done_rx) = std::sync::mpsc::channel::<String>();
	let done_tx = Mutex::new(done_tx);
	let slow = move |query: &str| -> Result<Vec<SelectOption<i64>>> {
		std::thread::sleep(Duration::from_millis(50));
		let _ = done_tx.lock().unwrap().send(query.to_string());
		Ok(vec![SelectOption::new(7, query)])
	};
	let (calls, on_change) = recorder();
	let start = Instant::now();
	let mut select = Select::builder()
		.options(fruit())
		.dynamic_search(slow)
		.on_change(on_change)
		.build();
	select.open(start);
	select.set_query("late", start);
	select.tick(start + Duration::from_millis(300));
	assert_eq!(select.state(), SelectState::OpenSearching);

	drop(select);

	assert_eq!(done_rx.recv_timeout(SETTLE).unwrap(), "late");
	// The worker exits and releases the provider once its answer has nowhere to go.
	assert!(matches!(
		done_rx.recv_timeout(SETTLE),
		Err(std::sync::mpsc::RecvTimeoutError::Disconnected)
	));
	assert!(calls.borrow().is_empty());
}

#[test]
fn external_loading_flag_is_reported() {
	let mut select = Select::builder().options(fruit()).loading(true).build();
	select.open(Instant::now());
	assert!(select.is_loading());
	assert!(select.visible().loading);

	select.set_loading(false);
	assert!(!select.visible().loading);
}

#[test]
fn highlight_moves_within_bounds() {
	let mut select = Select::new(fruit());
	select.open(Instant::now());
	select.move_highlight(-1);
	assert_eq!(select.highlighted(), Some(0));
	select.move_highlight(5);
	assert_eq!(select.highlighted(), Some(1));
	assert_eq!(select.highlighted_option().map(|option| option.value), Some(2));
}

#[test]
fn missing_callback_still_closes() {
	let mut select = Select::new(fruit());
	select.open(Instant::now());
	select.select(1);
	assert_eq!(select.state(), SelectState::Closed);
}

#[test]
fn typing_while_closed_is_ignored() {
	let mut select = Select::new(fruit());
	select.set_query("x", Instant::now());
	assert_eq!(select.query(), "");
}
