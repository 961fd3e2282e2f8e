use alloc::rc::Rc;
use core::cmp::Ordering;
use core::fmt;

/// A plain function deciding the order of two values.
pub type CompareFn<T> = fn(&T, &T) -> Ordering;

enum Order<T> {
    Natural(CompareFn<T>),
    Custom(Rc<dyn Fn(&T, &T) -> Ordering>),
}

impl<T> Clone for Order<T> {
    fn clone(&self) -> Self {
        match self {
            Order::Natural(compare) => Order::Natural(*compare),
            Order::Custom(compare) => Order::Custom(Rc::clone(compare)),
        }
    }
}

/// Natural ordering: equal values compare `Equal`, otherwise `a < b` decides.
///
/// Values that are neither equal nor less (NaN, for instance) compare
/// `Greater`.
pub fn natural_order<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    if a < b { Ordering::Less } else { Ordering::Greater }
}

/// An injectable total order plus the relational helpers derived from it.
///
/// Every container in this crate consults its comparator for value lookups,
/// so the comparator decides what "equal" means for `find` and `delete`.
///
/// # Examples
///
/// ```
/// use linear_collections::Comparator;
///
/// let mut cmp = Comparator::<i32>::new();
/// assert!(cmp.less_than(&1, &2));
///
/// cmp.reverse();
/// assert!(!cmp.less_than(&1, &2));
/// assert!(cmp.greater_than(&1, &2));
/// ```
pub struct Comparator<T> {
    order: Order<T>,
    reversed: bool,
}

impl<T: PartialOrd> Comparator<T> {
    /// Creates a comparator using the natural ordering of `T`.
    pub fn new() -> Self {
        Self {
            order: Order::Natural(natural_order::<T>),
            reversed: false,
        }
    }
}

impl<T> Comparator<T> {
    /// Creates a comparator from a custom ordering function.
    ///
    /// The function may capture state, e.g. a key or a modulus picked at
    /// runtime. Clones of the comparator share it.
    pub fn with<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self {
            order: Order::Custom(Rc::new(compare)),
            reversed: false,
        }
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        let (a, b) = if self.reversed { (b, a) } else { (a, b) };
        match &self.order {
            Order::Natural(compare) => compare(a, b),
            Order::Custom(compare) => compare(a, b),
        }
    }

    pub fn equal(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    pub fn less_than(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    pub fn greater_than(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    pub fn less_than_or_equal(&self, a: &T, b: &T) -> bool {
        self.less_than(a, b) || self.equal(a, b)
    }

    pub fn greater_than_or_equal(&self, a: &T, b: &T) -> bool {
        self.greater_than(a, b) || self.equal(a, b)
    }

    /// Flips the ordering in place.
    ///
    /// Every later query delegates to the previous behavior with its
    /// arguments swapped. Calling this twice restores the original order.
    pub fn reverse(&mut self) {
        self.reversed = !self.reversed;
    }

    /// Returns a flipped copy, leaving `self` untouched.
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.reverse();
        self
    }
}

impl<T: PartialOrd> Default for Comparator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            order: self.order.clone(),
            reversed: self.reversed,
        }
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = match self.order {
            Order::Natural(_) => "natural",
            Order::Custom(_) => "custom",
        };
        f.debug_struct("Comparator")
            .field("order", &order)
            .field("reversed", &self.reversed)
            .finish_non_exhaustive()
    }
}
