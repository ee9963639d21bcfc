use crate::core::{LinkStack, Node};

/// Iterator over the elements of a `LinkStack`, top first
#[derive(Clone)]
pub struct LinkStackIter<'a> {
    pub(crate) next: Option<&'a Node>,
    pub(crate) remaining: usize,
}

impl<'a> Iterator for LinkStackIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&*node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LinkStackIter<'_> {}

impl<'a> IntoIterator for &'a LinkStack {
    type Item = &'a [u8];
    type IntoIter = LinkStackIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
