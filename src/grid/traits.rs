pub trait GridView {
    type Sample: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn row(&self, t: usize) -> &[Self::Sample];
}

pub trait GridViewMut: GridView {
    fn row_mut(&mut self, t: usize) -> &mut [Self::Sample];
}
