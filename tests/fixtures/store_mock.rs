// Hand-expanded proxy for `Store { disk: Disk }`, item for item what the
// synthesizer emits with default options. `fixture_matches_synthesized_shape`
// in `generated_shapes.rs` keeps the two in step.

/// Per-method mock control state for [`Store`].
#[cfg(test)]
#[derive(Debug)]
pub struct StoreMocks {
    pub append: StoreAppendMock,
    pub read_all: StoreReadAllMock,
    pub usage: StoreUsageMock,
}

#[cfg(test)]
impl ::std::default::Default for StoreMocks {
    fn default() -> Self {
        Self {
            append: ::mockseam::runtime::MethodMock::new("Store::append"),
            read_all: ::mockseam::runtime::MethodMock::new("Store::read_all"),
            usage: ::mockseam::runtime::MethodMock::new("Store::usage"),
        }
    }
}

/// Parameters recorded for one call to `Store::append`.
#[cfg(test)]
pub struct StoreAppendCall {
    pub path: <str as ::std::borrow::ToOwned>::Owned,
    pub chunks: ::std::vec::Vec<Chunk>,
}

#[cfg(test)]
pub type StoreAppendFake = dyn Fn(&str, &[Chunk]) -> std::io::Result<usize> + Send + Sync;

#[cfg(test)]
pub type StoreAppendMock = ::mockseam::runtime::MethodMock<StoreAppendCall, StoreAppendFake, std::io::Result<usize>>;

/// Parameters recorded for one call to `Store::read_all`.
#[cfg(test)]
pub struct StoreReadAllCall {
    pub path: <str as ::std::borrow::ToOwned>::Owned,
}

#[cfg(test)]
pub type StoreReadAllFake = dyn Fn(&str) -> std::io::Result<Vec<u8>> + Send + Sync;

#[cfg(test)]
pub type StoreReadAllMock = ::mockseam::runtime::MethodMock<StoreReadAllCall, StoreReadAllFake, std::io::Result<Vec<u8>>>;

/// Parameters recorded for one call to `Store::usage`.
#[cfg(test)]
pub struct StoreUsageCall {
    pub path: <str as ::std::borrow::ToOwned>::Owned,
}

#[cfg(test)]
pub type StoreUsageFake = dyn Fn(&str) -> (u64, std::io::Result<()>) + Send + Sync;

#[cfg(test)]
pub type StoreUsageMock = ::mockseam::runtime::MethodMock<StoreUsageCall, StoreUsageFake, (u64, std::io::Result<()>)>;

impl Store {
    #[cfg(not(test))]
    #[inline]
    pub fn append(&self, path: &str, chunks: &[Chunk]) -> std::io::Result<usize> {
        self.disk.append(path, chunks)
    }

    #[cfg(test)]
    pub fn append(&self, path: &str, chunks: &[Chunk]) -> std::io::Result<usize> {
        let __call = StoreAppendCall {
            path: ::std::borrow::ToOwned::to_owned(path),
            chunks: <[Chunk]>::to_vec(chunks),
        };
        let __dispatch = self.mocks.append.enter(__call);
        match __dispatch {
            ::mockseam::runtime::Dispatch::Real => self.disk.append(path, chunks),
            ::mockseam::runtime::Dispatch::Return(__out) => __out,
            ::mockseam::runtime::Dispatch::Fake(__fake) => __fake(path, chunks),
        }
    }

    #[cfg(not(test))]
    #[inline]
    pub fn read_all(&self, path: &str) -> std::io::Result<Vec<u8>> {
        self.disk.read_all(path)
    }

    #[cfg(test)]
    pub fn read_all(&self, path: &str) -> std::io::Result<Vec<u8>> {
        let __call = StoreReadAllCall {
            path: ::std::borrow::ToOwned::to_owned(path),
        };
        let __dispatch = self.mocks.read_all.enter(__call);
        match __dispatch {
            ::mockseam::runtime::Dispatch::Real => self.disk.read_all(path),
            ::mockseam::runtime::Dispatch::Return(__out) => __out,
            ::mockseam::runtime::Dispatch::Fake(__fake) => __fake(path),
        }
    }

    #[cfg(not(test))]
    #[inline]
    pub fn usage(&self, path: &str) -> (u64, std::io::Result<()>) {
        self.disk.usage(path)
    }

    #[cfg(test)]
    pub fn usage(&self, path: &str) -> (u64, std::io::Result<()>) {
        let __call = StoreUsageCall {
            path: ::std::borrow::ToOwned::to_owned(path),
        };
        let __dispatch = self.mocks.usage.enter(__call);
        match __dispatch {
            ::mockseam::runtime::Dispatch::Real => self.disk.usage(path),
            ::mockseam::runtime::Dispatch::Return(__out) => __out,
            ::mockseam::runtime::Dispatch::Fake(__fake) => __fake(path),
        }
    }
}

#[cfg(test)]
impl Store {
    /// Serve every call to `Store::append` with a no-error zero value.
    pub fn mock_append_stub(&self) {
        self.mocks
            .append
            .stub_with(|| ::std::result::Result::Ok(::std::default::Default::default()));
    }

    /// Route every call to `Store::append` to `fake`.
    ///
    /// The call being served is already recorded when `fake` runs, so on the first call `mock_append_calls()` has one entry.
    pub fn mock_append_do(&self, fake: impl Fn(&str, &[Chunk]) -> std::io::Result<usize> + Send + Sync + 'static) {
        self.mocks.append.fake(::std::sync::Arc::new(fake));
    }

    /// Serve every call to `Store::append` with the given result (must be `Clone`).
    pub fn mock_append_return<__V>(&self, value: __V) where __V: ::mockseam::runtime::Canned<std::io::Result<usize>> {
        self.mocks.append.returns(value);
    }

    /// Calls to `Store::append` so far, in arrival order.
    pub fn mock_append_calls(&self) -> ::std::vec::Vec<::mockseam::runtime::CallRecord<StoreAppendCall>> {
        self.mocks.append.calls()
    }

    /// Serve every call to `Store::read_all` with a no-error zero value.
    pub fn mock_read_all_stub(&self) {
        self.mocks
            .read_all
            .stub_with(|| ::std::result::Result::Ok(::std::default::Default::default()));
    }

    /// Route every call to `Store::read_all` to `fake`.
    ///
    /// The call being served is already recorded when `fake` runs, so on the first call `mock_read_all_calls()` has one entry.
    pub fn mock_read_all_do(&self, fake: impl Fn(&str) -> std::io::Result<Vec<u8>> + Send + Sync + 'static) {
        self.mocks.read_all.fake(::std::sync::Arc::new(fake));
    }

    /// Serve every call to `Store::read_all` with the given result (must be `Clone`).
    pub fn mock_read_all_return<__V>(&self, value: __V) where __V: ::mockseam::runtime::Canned<std::io::Result<Vec<u8>>> {
        self.mocks.read_all.returns(value);
    }

    /// Calls to `Store::read_all` so far, in arrival order.
    pub fn mock_read_all_calls(&self) -> ::std::vec::Vec<::mockseam::runtime::CallRecord<StoreReadAllCall>> {
        self.mocks.read_all.calls()
    }

    /// Serve every call to `Store::usage` with a no-error zero value.
    pub fn mock_usage_stub(&self) {
        self.mocks.usage.stub_with(|| (::std::default::Default::default(), ::std::result::Result::Ok(::std::default::Default::default())));
    }

    /// Route every call to `Store::usage` to `fake`.
    ///
    /// The call being served is already recorded when `fake` runs, so on the first call `mock_usage_calls()` has one entry.
    pub fn mock_usage_do(&self, fake: impl Fn(&str) -> (u64, std::io::Result<()>) + Send + Sync + 'static) {
        self.mocks.usage.fake(::std::sync::Arc::new(fake));
    }

    /// Serve every call to `Store::usage` with the given result (must be `Clone`).
    pub fn mock_usage_return<__V0, __V1>(&self, r0: __V0, r1: __V1) where (__V0, __V1): ::mockseam::runtime::Canned<(u64, std::io::Result<()>)> {
        self.mocks.usage.returns((r0, r1));
    }

    /// Calls to `Store::usage` so far, in arrival order.
    pub fn mock_usage_calls(&self) -> ::std::vec::Vec<::mockseam::runtime::CallRecord<StoreUsageCall>> {
        self.mocks.usage.calls()
    }
}
