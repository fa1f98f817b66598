/// Return types accepted from test functions.
///
/// An `Err` returned from a test function ends the invocation and is
/// reported as an unexpected fault, like an uncaught panic.
pub trait Termination: sealed::Sealed {
    #[doc(hidden)] // private API
    fn into_result(self) -> anyhow::Result<()>;
}

impl Termination for () {
    #[inline]
    fn into_result(self) -> anyhow::Result<()> {
        Ok(())
    }
}

impl<E> Termination for Result<(), E>
where
    E: Into<anyhow::Error>,
{
    #[inline]
    fn into_result(self) -> anyhow::Result<()> {
        self.map_err(Into::into)
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for () {}

    impl<E> Sealed for Result<(), E> where E: Into<anyhow::Error> {}
}
