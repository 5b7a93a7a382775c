#![deny(warnings)]

// A buffering wrapper over any iterator that allows backtracking.
// Items pulled from the source stay in `buf` until ignored/extracted,
// so the cursor can be rewound to any previously saved position.
pub struct Scanner<I: Iterator>
where
    I::Item: Clone,
{
    src: I,
    buf: Vec<I::Item>,
    pos: isize, // -1 sits just before the first buffered item
}

impl<I> Iterator for Scanner<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.pos += 1;
        self.fill_buffer();
        let blen = self.buf.len() as isize;
        if self.pos > blen {
            self.pos = blen;
        }
        self.curr()
    }
}

impl<I> Scanner<I>
where
    I: Iterator,
    I::Item: Clone,
{
    pub fn new(source: I) -> Scanner<I> {
        Scanner { src: source, buf: Vec::new(), pos: -1 }
    }

    pub fn pos(&self) -> isize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: isize) -> bool {
        if pos < -1 || pos > (self.buf.len() as isize) {
            return false;
        }
        self.pos = pos;
        true
    }

    pub fn curr(&self) -> Option<I::Item> {
        if self.pos < 0 || self.pos as usize >= self.buf.len() {
            return None;
        }
        Some(self.buf[self.pos as usize].clone())
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    // pull from the source until the buffer covers self.pos
    fn fill_buffer(&mut self) {
        while self.pos >= (self.buf.len() as isize) {
            match self.src.next() {
                Some(item) => self.buf.push(item),
                None => break,
            }
        }
    }

    // Drop everything up to the cursor, the scanner starts fresh at
    // the following item.
    pub fn ignore(&mut self) {
        if self.pos >= 0 {
            let n = (self.pos + 1) as usize;
            self.buf = if self.buf.len() > n {
                self.buf[n..].to_vec()
            } else {
                Vec::new()
            };
        }
        self.pos = -1;
    }

    // Take everything up to the cursor out of the buffer.
    pub fn extract(&mut self) -> Vec<I::Item> {
        let n = ((self.pos + 1).max(0) as usize).min(self.buf.len());
        let items = self.buf[..n].to_vec();
        self.ignore();
        items
    }
}

impl<I> Scanner<I>
where
    I: Iterator,
    I::Item: Clone + PartialEq,
{
    // Advance the scanner only if the next item equals `what`.
    pub fn accept(&mut self, what: &I::Item) -> Option<I::Item> {
        let backtrack = self.pos();
        if let Some(next) = self.next() {
            if &next == what {
                return Some(next);
            }
        }
        self.set_pos(backtrack);
        None
    }

    // Advance the scanner only if the next item is in the `any` set,
    // self.curr() returns the matched item on success.
    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        let backtrack = self.pos();
        if let Some(next) = self.next() {
            if any.contains(&next) {
                return Some(next);
            }
        }
        self.set_pos(backtrack);
        None
    }

    // Skip over items in the `over` set, result is if the scanner advanced.
    pub fn skip_all(&mut self, over: &[I::Item]) -> bool {
        let mut advanced = false;
        while self.accept_any(over).is_some() {
            advanced = true;
        }
        advanced
    }
}
