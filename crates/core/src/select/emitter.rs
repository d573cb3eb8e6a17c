/// Called with the committed option value.
pub type ChangeCallback<V> = Box<dyn FnMut(V)>;
/// Called with the settled query text while dynamic search is active.
pub type QueryCallback = Box<dyn FnMut(&str)>;

/// Outbound notifications. Both callbacks are optional and a missing one turns
/// the notification into a no-op.
pub(crate) struct Emitter<V> {
	on_change: Option<ChangeCallback<V>>,
	on_query_change: Option<QueryCallback>,
}

impl<V> Emitter<V> {
	pub(crate) fn new(
		on_change: Option<ChangeCallback<V>>,
		on_query_change: Option<QueryCallback>,
	) -> Self {
		Self {
			on_change,
			on_query_change,
		}
	}

	pub(crate) fn change(&mut self, value: V) {
		if let Some(callback) = self.on_change.as_mut() {
			callback(value);
		}
	}

	pub(crate) fn query(&mut self, query: &str) {
		if let Some(callback) = self.on_query_change.as_mut() {
			callback(query);
		}
	}

	pub(crate) fn set_on_change(&mut self, callback: ChangeCallback<V>) {
		self.on_change = Some(callback);
	}

	pub(crate) fn set_on_query_change(&mut self, callback: QueryCallback) {
		self.on_query_change = Some(callback);
	}
}
