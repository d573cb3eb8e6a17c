use ratatui::layout::{Position, Rect};

/// Outside-click listener for one select.
///
/// Attached with the select's own regions while the dropdown is open and
/// detached as soon as it closes; a detached listener reports nothing.
#[derive(Debug, Default)]
pub struct OutsideClick {
	regions: Option<Vec<Rect>>,
}

impl OutsideClick {
	pub fn attach(&mut self, regions: impl IntoIterator<Item = Rect>) {
		self.regions = Some(regions.into_iter().collect());
	}

	pub fn detach(&mut self) {
		self.regions = None;
	}

	pub fn is_attached(&self) -> bool {
		self.regions.is_some()
	}

	/// True when the listener is attached and `position` falls outside every
	/// region it was attached with.
	pub fn is_outside(&self, position: Position) -> bool {
		self.regions
			.as_ref()
			.is_some_and(|regions| !regions.iter().any(|region| region.contains(position)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn detached_listener_ignores_clicks() {
		let listener = OutsideClick::default();
		assert!(!listener.is_outside(Position::new(50, 50)));
	}

	#[test]
	fn clicks_inside_any_region_are_not_outside() {
		let mut listener = OutsideClick::default();
		listener.attach([Rect::new(0, 0, 10, 3), Rect::new(0, 3, 10, 5)]);
		assert!(!listener.is_outside(Position::new(2, 1)));
		assert!(!listener.is_outside(Position::new(2, 6)));
		assert!(listener.is_outside(Position::new(20, 1)));

		listener.detach();
		assert!(!listener.is_outside(Position::new(20, 1)));
	}
}
