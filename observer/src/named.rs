use std::{
    cell::RefCell,
    fmt::{self, Debug},
    io::{self, Write},
    rc::Rc,
};

use common::subject_observer::Observer;
use log::{debug, info, warn};

/// Where greetings are written, shared between observers.
pub type Sink = Rc<RefCell<dyn Write>>;

/// Observer greeting on every notification.
///
/// Creation and drop are logged so the shared lifetime of an observer held
/// by several subjects can be followed.
pub struct NamedObserver {
    name: String,
    sink: Sink,
}

impl NamedObserver {
    /// Observer greeting on stdout.
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Self::with_sink(name, Rc::new(RefCell::new(io::stdout())))
    }

    pub fn with_sink(name: impl Into<String>, sink: Sink) -> Rc<Self> {
        let name = name.into();
        debug!("Constructor for {name}");
        Rc::new(NamedObserver { name, sink })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn greeting(&self) -> String {
        format!("Hello! I'm a {}", self.name)
    }
}

impl<S: ?Sized, E: Debug> Observer<S, E> for NamedObserver {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, _source: &S, event: E) {
        info!("{} notified of {:?}", self.name, event);
        if let Err(e) = writeln!(self.sink.borrow_mut(), "{}", self.greeting()) {
            warn!("{} could not greet: {e}", self.name);
        }
    }
}

impl Debug for NamedObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedObserver")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Drop for NamedObserver {
    fn drop(&mut self) {
        debug!("Destructor for {}", self.name);
    }
}
