//! Sample domain object for the test suite. Not part of the library.

/* TestObject */

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestObject {
    value: i32,
    child: Option<Box<TestObject>>,
}

impl TestObject {
    pub fn new(value: i32) -> Self {
        Self { value, child: None }
    }

    pub fn with_child(value: i32, child: TestObject) -> Self {
        Self {
            value,
            child: Some(Box::new(child)),
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn into_child(self) -> Option<TestObject> {
        self.child.map(|child| *child)
    }

    // Injectable failing stubs: panic on demand with a non-absence payload.

    pub fn value_checked(&self, fail: bool) -> i32 {
        if fail {
            panic!("invalid argument");
        }

        self.value
    }

    pub fn into_child_checked(self, fail: bool) -> Option<TestObject> {
        if fail {
            panic!("invalid argument");
        }

        self.into_child()
    }
}

/* Person */

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}
