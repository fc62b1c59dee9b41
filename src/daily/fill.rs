//! Gap filling over the date-ordered daily series.

/// Forward-fills a column, then backward-fills its leading gap.
///
/// One pass carries the last seen value forward and counts the leading
/// missing cells; those are then set to the first known value. A column with
/// no value at all is left untouched.
pub fn fill_forward_backward<T: Clone>(cells: &mut [&mut Option<T>]) {
    let mut last: Option<T> = None;
    let mut leading = 0;

    for slot in cells.iter_mut() {
        let cell: &mut Option<T> = &mut **slot;
        match cell {
            Some(v) => last = Some(v.clone()),
            None => match &last {
                Some(v) => *cell = Some(v.clone()),
                None => leading += 1,
            },
        }
    }

    if leading == 0 {
        return;
    }

    if let Some(first) = cells.get(leading).and_then(|c| (**c).clone()) {
        for slot in cells.iter_mut().take(leading) {
            **slot = Some(first.clone());
        }
    }
}
