/// Renders and measures the host elements backing pool slots.
///
/// The list owns every element it gets from `render`; hosts see them again only through
/// `update` and the read-only slot views.
pub trait ItemRenderer<T> {
    type Element;

    /// Materializes a new element. `None` asks for a hidden placeholder.
    ///
    /// Returning `None` means the markup had no root element. The list treats that as a broken
    /// contract and fails the whole materialization.
    fn render(&mut self, item: Option<&T>) -> Option<Self::Element>;

    /// Rewrites `element` in place to show `item`, or hides it when `item` is `None`.
    ///
    /// The element must keep its identity: the slot keeps pointing at it.
    fn update(&mut self, element: &mut Self::Element, item: Option<&T>);

    /// Rendered height of a visible element, in pixels.
    fn height(&self, element: &Self::Element) -> f64;
}
