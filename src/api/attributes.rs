use crate::core::{AttrValue, LineAttr, Series, validate_attr_value};
use crate::error::SelectorResult;
use crate::surface::ChartSurface;

use super::{LineSelector, validation};

impl<S: ChartSurface> LineSelector<S> {
    /// Assigns one value to the given attribute of every clipboard series.
    /// One redraw after the batch.
    pub fn set_attr(&mut self, attr: LineAttr, value: AttrValue) -> SelectorResult<()> {
        validate_attr_value(attr, &value)?;
        for handle in self.clipboard.iter() {
            handle.borrow_mut().style.set_attr(attr, value.clone())?;
        }
        self.redraw();
        Ok(())
    }

    /// Assigns values positionally: `values[i]` goes to the i-th clipboard
    /// series. The value count must match the clipboard size exactly, and
    /// every value is validated, before any series is touched.
    pub fn set_attr_each(&mut self, attr: LineAttr, values: &[AttrValue]) -> SelectorResult<()> {
        validation::check_value_count(self.clipboard.len(), values.len())?;
        for value in values {
            validate_attr_value(attr, value)?;
        }
        for (handle, value) in self.clipboard.iter().zip(values) {
            handle.borrow_mut().style.set_attr(attr, value.clone())?;
        }
        self.redraw();
        Ok(())
    }

    /// Computes one value per clipboard series by calling `producer` once
    /// per entry with the series and its clipboard position.
    pub fn set_attr_with(
        &mut self,
        attr: LineAttr,
        mut producer: impl FnMut(&Series, usize) -> AttrValue,
    ) -> SelectorResult<()> {
        let values: Vec<AttrValue> = self
            .clipboard
            .iter()
            .enumerate()
            .map(|(index, handle)| producer(&handle.borrow(), index))
            .collect();
        self.set_attr_each(attr, &values)
    }

    /// Reads the given attribute of every clipboard series, in clipboard
    /// order.
    #[must_use]
    pub fn get_attr(&self, attr: LineAttr) -> Vec<AttrValue> {
        self.clipboard
            .iter()
            .map(|handle| handle.borrow().style.attr(attr))
            .collect()
    }
}
