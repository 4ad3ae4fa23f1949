// Hand-expanded proxy for `Uploader { api: S3Api }`, item for item what the
// synthesizer emits with default options. `fixture_matches_synthesized_shape`
// keeps the two in step.

/// Per-method mock control state for [`Uploader`].
#[cfg(test)]
#[derive(Debug)]
pub struct UploaderMocks {
    pub attach: UploaderAttachMock,
    pub create_bucket: UploaderCreateBucketMock,
    pub head_bucket: UploaderHeadBucketMock,
    pub list: UploaderListMock,
    pub put_object: UploaderPutObjectMock,
    pub stat: UploaderStatMock,
}

#[cfg(test)]
impl ::std::default::Default for UploaderMocks {
    fn default() -> Self {
        Self {
            attach: ::mockseam::runtime::MethodMock::new("Uploader::attach"),
            create_bucket: ::mockseam::runtime::MethodMock::new("Uploader::create_bucket"),
            head_bucket: ::mockseam::runtime::MethodMock::new("Uploader::head_bucket"),
            list: ::mockseam::runtime::MethodMock::new("Uploader::list"),
            put_object: ::mockseam::runtime::MethodMock::new("Uploader::put_object"),
            stat: ::mockseam::runtime::MethodMock::new("Uploader::stat"),
        }
    }
}

/// Parameters recorded for one call to `Uploader::attach`.
#[cfg(test)]
pub struct UploaderAttachCall {
    pub blob: Arc<Vec<u8>>,
}

#[cfg(test)]
pub type UploaderAttachFake = dyn Fn(Arc<Vec<u8>>) -> usize + Send + Sync;

#[cfg(test)]
pub type UploaderAttachMock =
    ::mockseam::runtime::MethodMock<UploaderAttachCall, UploaderAttachFake, usize>;

/// Parameters recorded for one call to `Uploader::create_bucket`.
#[cfg(test)]
pub struct UploaderCreateBucketCall {
    pub bucket: <str as ::std::borrow::ToOwned>::Owned,
}

#[cfg(test)]
pub type UploaderCreateBucketFake = dyn Fn(&str) -> Result<(), S3Error> + Send + Sync;

#[cfg(test)]
pub type UploaderCreateBucketMock = ::mockseam::runtime::MethodMock<UploaderCreateBucketCall, UploaderCreateBucketFake, Result<(), S3Error>>;

/// Parameters recorded for one call to `Uploader::head_bucket`.
#[cfg(test)]
pub struct UploaderHeadBucketCall {
    pub bucket: <str as ::std::borrow::ToOwned>::Owned,
}

#[cfg(test)]
pub type UploaderHeadBucketFake = dyn Fn(&str) -> Result<(), S3Error> + Send + Sync;

#[cfg(test)]
pub type UploaderHeadBucketMock = ::mockseam::runtime::MethodMock<UploaderHeadBucketCall, UploaderHeadBucketFake, Result<(), S3Error>>;

/// Parameters recorded for one call to `Uploader::list`.
#[cfg(test)]
pub struct UploaderListCall {
    pub prefixes: ::std::vec::Vec<String>,
}

#[cfg(test)]
pub type UploaderListFake = dyn Fn(&[String]) -> Vec<String> + Send + Sync;

#[cfg(test)]
pub type UploaderListMock =
    ::mockseam::runtime::MethodMock<UploaderListCall, UploaderListFake, Vec<String>>;

/// Parameters recorded for one call to `Uploader::put_object`.
#[cfg(test)]
pub struct UploaderPutObjectCall {
    pub bucket: <str as ::std::borrow::ToOwned>::Owned,
    pub key: <str as ::std::borrow::ToOwned>::Owned,
    pub body: Vec<u8>,
}

#[cfg(test)]
pub type UploaderPutObjectFake = dyn Fn(&str, &str, Vec<u8>) -> Result<(), S3Error> + Send + Sync;

#[cfg(test)]
pub type UploaderPutObjectMock = ::mockseam::runtime::MethodMock<UploaderPutObjectCall, UploaderPutObjectFake, Result<(), S3Error>>;

/// Parameters recorded for one call to `Uploader::stat`.
#[cfg(test)]
pub struct UploaderStatCall {
    pub key: <str as ::std::borrow::ToOwned>::Owned,
}

#[cfg(test)]
pub type UploaderStatFake = dyn Fn(&str) -> (u64, Result<(), S3Error>) + Send + Sync;

#[cfg(test)]
pub type UploaderStatMock = ::mockseam::runtime::MethodMock<UploaderStatCall, UploaderStatFake, (u64, Result<(), S3Error>)>;

impl Uploader {
    #[cfg(not(test))]
    #[inline]
    pub fn attach(&self, blob: Arc<Vec<u8>>) -> usize {
        self.api.attach(blob)
    }

    #[cfg(test)]
    pub fn attach(&self, blob: Arc<Vec<u8>>) -> usize {
        let __call = UploaderAttachCall {
            blob: ::std::clone::Clone::clone(&blob),
        };
        let __dispatch = self.mocks.attach.enter(__call);
        match __dispatch {
            ::mockseam::runtime::Dispatch::Real => self.api.attach(blob),
            ::mockseam::runtime::Dispatch::Return(__out) => __out,
            ::mockseam::runtime::Dispatch::Fake(__fake) => __fake(blob),
        }
    }

    #[cfg(not(test))]
    #[inline]
    pub fn create_bucket(&self, bucket: &str) -> Result<(), S3Error> {
        self.api.create_bucket(bucket)
    }

    #[cfg(test)]
    pub fn create_bucket(&self, bucket: &str) -> Result<(), S3Error> {
        let __call = UploaderCreateBucketCall {
            bucket: ::std::borrow::ToOwned::to_owned(bucket),
        };
        let __dispatch = self.mocks.create_bucket.enter(__call);
        match __dispatch {
            ::mockseam::runtime::Dispatch::Real => self.api.create_bucket(bucket),
            ::mockseam::runtime::Dispatch::Return(__out) => __out,
            ::mockseam::runtime::Dispatch::Fake(__fake) => __fake(bucket),
        }
    }

    #[cfg(not(test))]
    #[inline]
    pub fn head_bucket(&self, bucket: &str) -> Result<(), S3Error> {
        self.api.head_bucket(bucket)
    }

    #[cfg(test)]
    pub fn head_bucket(&self, bucket: &str) -> Result<(), S3Error> {
        let __call = UploaderHeadBucketCall {
            bucket: ::std::borrow::ToOwned::to_owned(bucket),
        };
        let __dispatch = self.mocks.head_bucket.enter(__call);
        match __dispatch {
            ::mockseam::runtime::Dispatch::Real => self.api.head_bucket(bucket),
            ::mockseam::runtime::Dispatch::Return(__out) => __out,
            ::mockseam::runtime::Dispatch::Fake(__fake) => __fake(bucket),
        }
    }

    #[cfg(not(test))]
    #[inline]
    pub fn list(&self, prefixes: &[String]) -> Vec<String> {
        self.api.list(prefixes)
    }

    #[cfg(test)]
    pub fn list(&self, prefixes: &[String]) -> Vec<String> {
        let __call = UploaderListCall {
            prefixes: <[String]>::to_vec(prefixes),
        };
        let __dispatch = self.mocks.list.enter(__call);
        match __dispatch {
            ::mockseam::runtime::Dispatch::Real => self.api.list(prefixes),
            ::mockseam::runtime::Dispatch::Return(__out) => __out,
            ::mockseam::runtime::Dispatch::Fake(__fake) => __fake(prefixes),
        }
    }

    #[cfg(not(test))]
    #[inline]
    pub fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<(), S3Error> {
        self.api.put_object(bucket, key, body)
    }

    #[cfg(test)]
    pub fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<(), S3Error> {
        let __call = UploaderPutObjectCall {
            bucket: ::std::borrow::ToOwned::to_owned(bucket),
            key: ::std::borrow::ToOwned::to_owned(key),
            body: ::std::clone::Clone::clone(&body),
        };
        let __dispatch = self.mocks.put_object.enter(__call);
        match __dispatch {
            ::mockseam::runtime::Dispatch::Real => self.api.put_object(bucket, key, body),
            ::mockseam::runtime::Dispatch::Return(__out) => __out,
            ::mockseam::runtime::Dispatch::Fake(__fake) => __fake(bucket, key, body),
        }
    }

    #[cfg(not(test))]
    #[inline]
    pub fn stat(&self, key: &str) -> (u64, Result<(), S3Error>) {
        self.api.stat(key)
    }

    #[cfg(test)]
    pub fn stat(&self, key: &str) -> (u64, Result<(), S3Error>) {
        let __call = UploaderStatCall {
            key: ::std::borrow::ToOwned::to_owned(key),
        };
        let __dispatch = self.mocks.stat.enter(__call);
        match __dispatch {
            ::mockseam::runtime::Dispatch::Real => self.api.stat(key),
            ::mockseam::runtime::Dispatch::Return(__out) => __out,
            ::mockseam::runtime::Dispatch::Fake(__fake) => __fake(key),
        }
    }
}

#[cfg(test)]
impl Uploader {
    /// Serve every call to `Uploader::attach` with a no-error zero value.
    pub fn mock_attach_stub(&self) {
        self.mocks.attach.stub_with(|| ::std::default::Default::default());
    }

    /// Route every call to `Uploader::attach` to `fake`.
    ///
    /// The call being served is already recorded when `fake` runs, so on the first call `mock_attach_calls()` has one entry.
    pub fn mock_attach_do(&self, fake: impl Fn(Arc<Vec<u8>>) -> usize + Send + Sync + 'static) {
        self.mocks.attach.fake(::std::sync::Arc::new(fake));
    }

    /// Serve every call to `Uploader::attach` with the given result (must be `Clone`).
    pub fn mock_attach_return<__V>(&self, value: __V) where __V: ::mockseam::runtime::Canned<usize> {
        self.mocks.attach.returns(value);
    }

    /// Calls to `Uploader::attach` so far, in arrival order.
    pub fn mock_attach_calls(&self) -> ::std::vec::Vec<::mockseam::runtime::CallRecord<UploaderAttachCall>> {
        self.mocks.attach.calls()
    }

    /// Serve every call to `Uploader::create_bucket` with a no-error zero value.
    pub fn mock_create_bucket_stub(&self) {
        self.mocks
            .create_bucket
            .stub_with(|| ::std::result::Result::Ok(::std::default::Default::default()));
    }

    /// Route every call to `Uploader::create_bucket` to `fake`.
    ///
    /// The call being served is already recorded when `fake` runs, so on the first call `mock_create_bucket_calls()` has one entry.
    pub fn mock_create_bucket_do(&self, fake: impl Fn(&str) -> Result<(), S3Error> + Send + Sync + 'static) {
        self.mocks.create_bucket.fake(::std::sync::Arc::new(fake));
    }

    /// Serve every call to `Uploader::create_bucket` with the given result (must be `Clone`).
    pub fn mock_create_bucket_return<__V>(&self, value: __V) where __V: ::mockseam::runtime::Canned<Result<(), S3Error>> {
        self.mocks.create_bucket.returns(value);
    }

    /// Calls to `Uploader::create_bucket` so far, in arrival order.
    pub fn mock_create_bucket_calls(&self) -> ::std::vec::Vec<::mockseam::runtime::CallRecord<UploaderCreateBucketCall>> {
        self.mocks.create_bucket.calls()
    }

    /// Serve every call to `Uploader::head_bucket` with a no-error zero value.
    pub fn mock_head_bucket_stub(&self) {
        self.mocks
            .head_bucket
            .stub_with(|| ::std::result::Result::Ok(::std::default::Default::default()));
    }

    /// Route every call to `Uploader::head_bucket` to `fake`.
    ///
    /// The call being served is already recorded when `fake` runs, so on the first call `mock_head_bucket_calls()` has one entry.
    pub fn mock_head_bucket_do(&self, fake: impl Fn(&str) -> Result<(), S3Error> + Send + Sync + 'static) {
        self.mocks.head_bucket.fake(::std::sync::Arc::new(fake));
    }

    /// Serve every call to `Uploader::head_bucket` with the given result (must be `Clone`).
    pub fn mock_head_bucket_return<__V>(&self, value: __V) where __V: ::mockseam::runtime::Canned<Result<(), S3Error>> {
        self.mocks.head_bucket.returns(value);
    }

    /// Calls to `Uploader::head_bucket` so far, in arrival order.
    pub fn mock_head_bucket_calls(&self) -> ::std::vec::Vec<::mockseam::runtime::CallRecord<UploaderHeadBucketCall>> {
        self.mocks.head_bucket.calls()
    }

    /// Serve every call to `Uploader::list` with a no-error zero value.
    pub fn mock_list_stub(&self) {
        self.mocks.list.stub_with(|| ::std::default::Default::default());
    }

    /// Route every call to `Uploader::list` to `fake`.
    ///
    /// The call being served is already recorded when `fake` runs, so on the first call `mock_list_calls()` has one entry.
    pub fn mock_list_do(&self, fake: impl Fn(&[String]) -> Vec<String> + Send + Sync + 'static) {
        self.mocks.list.fake(::std::sync::Arc::new(fake));
    }

    /// Serve every call to `Uploader::list` with the given result (must be `Clone`).
    pub fn mock_list_return<__V>(&self, value: __V) where __V: ::mockseam::runtime::Canned<Vec<String>> {
        self.mocks.list.returns(value);
    }

    /// Calls to `Uploader::list` so far, in arrival order.
    pub fn mock_list_calls(&self) -> ::std::vec::Vec<::mockseam::runtime::CallRecord<UploaderListCall>> {
        self.mocks.list.calls()
    }

    /// Serve every call to `Uploader::put_object` with a no-error zero value.
    pub fn mock_put_object_stub(&self) {
        self.mocks
            .put_object
            .stub_with(|| ::std::result::Result::Ok(::std::default::Default::default()));
    }

    /// Route every call to `Uploader::put_object` to `fake`.
    ///
    /// The call being served is already recorded when `fake` runs, so on the first call `mock_put_object_calls()` has one entry.
    pub fn mock_put_object_do(&self, fake: impl Fn(&str, &str, Vec<u8>) -> Result<(), S3Error> + Send + Sync + 'static) {
        self.mocks.put_object.fake(::std::sync::Arc::new(fake));
    }

    /// Serve every call to `Uploader::put_object` with the given result (must be `Clone`).
    pub fn mock_put_object_return<__V>(&self, value: __V) where __V: ::mockseam::runtime::Canned<Result<(), S3Error>> {
        self.mocks.put_object.returns(value);
    }

    /// Calls to `Uploader::put_object` so far, in arrival order.
    pub fn mock_put_object_calls(&self) -> ::std::vec::Vec<::mockseam::runtime::CallRecord<UploaderPutObjectCall>> {
        self.mocks.put_object.calls()
    }

    /// Serve every call to `Uploader::stat` with a no-error zero value.
    pub fn mock_stat_stub(&self) {
        self.mocks.stat.stub_with(|| (::std::default::Default::default(), ::std::result::Result::Ok(::std::default::Default::default())));
    }

    /// Route every call to `Uploader::stat` to `fake`.
    ///
    /// The call being served is already recorded when `fake` runs, so on the first call `mock_stat_calls()` has one entry.
    pub fn mock_stat_do(&self, fake: impl Fn(&str) -> (u64, Result<(), S3Error>) + Send + Sync + 'static) {
        self.mocks.stat.fake(::std::sync::Arc::new(fake));
    }

    /// Serve every call to `Uploader::stat` with the given result (must be `Clone`).
    pub fn mock_stat_return<__V0, __V1>(&self, r0: __V0, r1: __V1) where (__V0, __V1): ::mockseam::runtime::Canned<(u64, Result<(), S3Error>)> {
        self.mocks.stat.returns((r0, r1));
    }

    /// Calls to `Uploader::stat` so far, in arrival order.
    pub fn mock_stat_calls(&self) -> ::std::vec::Vec<::mockseam::runtime::CallRecord<UploaderStatCall>> {
        self.mocks.stat.calls()
    }
}
