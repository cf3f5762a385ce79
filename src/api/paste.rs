use crate::surface::ChartSurface;

use super::LineSelector;

impl<S: ChartSurface> LineSelector<S> {
    /// Copies every clipboard series onto `target`: a new series is created
    /// on the target surface with the same sample data, then every
    /// allow-listed style attribute is carried over.
    ///
    /// Returns a new selector bound to the target surface whose clipboard
    /// already holds exactly the pasted series, in source-clipboard order,
    /// ready for further restyling. The source selector's own clipboard and
    /// surface are left untouched. One redraw on the target.
    pub fn paste_selection<T: ChartSurface>(&self, mut target: T) -> LineSelector<T> {
        let mut pasted = Vec::with_capacity(self.clipboard.len());
        for handle in self.clipboard.iter() {
            let source = handle.borrow();
            let copy = target.create_series(source.data().to_vec(), source.label());
            copy.borrow_mut().style = source.style.clone();
            pasted.push(copy);
        }
        target.request_redraw();

        let mut selector = LineSelector::assemble(target, self.config);
        for handle in pasted {
            selector.clipboard.add(handle);
        }
        selector
    }
}
