/// Majority vote over the last `N` readings of a digital input.
#[derive(Debug, Eq, PartialEq, defmt::Format)]
pub struct Debounced<const N: usize> {
    history: [bool; N],
    pointer: usize,
    active: bool,
}

impl<const N: usize> Debounced<N> {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            history: [false; N],
            pointer: 0,
            active: false,
        }
    }

    pub fn update(&mut self, value: bool) -> bool {
        self.history[self.pointer] = value;
        self.pointer = (self.pointer + 1) % N;
        let up = self.history.iter().filter(|i| **i).count();
        // NOTE: Ties keep the previous state.
        if up * 2 > N {
            self.active = true;
        } else if up * 2 < N {
            self.active = false;
        }
        self.active
    }

    pub fn active(&self) -> bool {
        self.active
    }
}
