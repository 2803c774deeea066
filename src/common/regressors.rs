use crate::LmsError;

/// Element type tag of a regressor matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataType {
    F32,
    F64,
    I32,
    I64,
    U8,
}

/// A scalar that can be stored in a regressor matrix.
pub trait Element: Copy {
    const DATA_TYPE: DataType;
    fn to_f64(self) -> f64;
}

impl Element for f64 {
    const DATA_TYPE: DataType = DataType::F64;
    fn to_f64(self) -> f64 {
        self
    }
}

impl Element for f32 {
    const DATA_TYPE: DataType = DataType::F32;
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Element for i32 {
    const DATA_TYPE: DataType = DataType::I32;
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Element for i64 {
    const DATA_TYPE: DataType = DataType::I64;
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Element for u8 {
    const DATA_TYPE: DataType = DataType::U8;
    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// A two dimensional matrix of filter tap inputs, one row per channel
/// and one column per tap.
///
/// Implementors only provide storage and element access. Shape and data
/// type checks are done by the filter.
pub trait Regressors {
    /// Returns `(rows, cols)`.
    fn dimensions(&self) -> (usize, usize);
    fn data_type(&self) -> DataType;
    /// Returns the element at `row`, `col`. Only called with indices
    /// inside [`Regressors::dimensions`].
    fn element_at(&self, row: usize, col: usize) -> f64;
}

/// A borrowed, row major matrix view of a flat slice.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a, T: Element> {
    data: &'a [T],
    rows: usize,
    cols: usize,
}

impl<'a, T: Element> MatrixView<'a, T> {
    /// Fails with [`LmsError::LengthMismatch`] unless `data` holds exactly
    /// `rows * cols` elements.
    pub fn new(data: &'a [T], rows: usize, cols: usize) -> Result<Self, LmsError> {
        let expected = rows.checked_mul(cols);
        if expected != Some(data.len()) {
            return Err(LmsError::LengthMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(MatrixView { data, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns row `row`, if it exists.
    pub fn row(&self, row: usize) -> Option<&'a [T]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.data[start..start + self.cols])
    }
}

impl<'a, T: Element> Regressors for MatrixView<'a, T> {
    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn data_type(&self) -> DataType {
        T::DATA_TYPE
    }

    fn element_at(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col].to_f64()
    }
}

impl<T: Element, const COLS: usize> Regressors for [[T; COLS]] {
    fn dimensions(&self) -> (usize, usize) {
        (self.len(), COLS)
    }

    fn data_type(&self) -> DataType {
        T::DATA_TYPE
    }

    fn element_at(&self, row: usize, col: usize) -> f64 {
        self[row][col].to_f64()
    }
}

impl<T: Element, const ROWS: usize, const COLS: usize> Regressors for [[T; COLS]; ROWS] {
    fn dimensions(&self) -> (usize, usize) {
        (ROWS, COLS)
    }

    fn data_type(&self) -> DataType {
        T::DATA_TYPE
    }

    fn element_at(&self, row: usize, col: usize) -> f64 {
        self[row][col].to_f64()
    }
}

impl<'a, R: Regressors + ?Sized> Regressors for &'a R {
    fn dimensions(&self) -> (usize, usize) {
        (**self).dimensions()
    }

    fn data_type(&self) -> DataType {
        (**self).data_type()
    }

    fn element_at(&self, row: usize, col: usize) -> f64 {
        (**self).element_at(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::{DataType, MatrixView, Regressors};
    use crate::LmsError;
    use alloc::vec;

    #[test]
    fn test_matrix_view_row_major() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let view = MatrixView::new(&data, 2, 3).unwrap();
        assert_eq!(view.dimensions(), (2, 3));
        assert_eq!(view.data_type(), DataType::F64);
        assert_eq!(view.element_at(0, 2), 3.0);
        assert_eq!(view.element_at(1, 0), 4.0);
        assert_eq!(view.row(1), Some(&data[3..]));
        assert_eq!(view.row(2), None);
    }

    #[test]
    fn test_matrix_view_length_mismatch() {
        let data = [1.0; 5];
        assert_eq!(
            MatrixView::new(&data, 2, 3).unwrap_err(),
            LmsError::LengthMismatch {
                expected: Some(6),
                got: 5
            }
        );
        assert_eq!(
            MatrixView::new(&data, usize::MAX, 2).unwrap_err(),
            LmsError::LengthMismatch {
                expected: None,
                got: 5
            }
        );
    }

    #[test]
    fn test_array_data_type_tags() {
        let f32_rows = [[1.0f32, 2.0]];
        let i32_rows = [[1i32], [2i32]];
        assert_eq!(f32_rows.data_type(), DataType::F32);
        assert_eq!(i32_rows.data_type(), DataType::I32);
        assert_eq!(i32_rows.dimensions(), (2, 1));
        assert_eq!(i32_rows.element_at(1, 0), 2.0);
    }

    #[test]
    fn test_row_slice() {
        let rows = vec![[0.5, 1.5, 2.5]; 4];
        assert_eq!(rows[..].dimensions(), (4, 3));
        assert_eq!(rows[..].element_at(3, 1), 1.5);
    }
}
