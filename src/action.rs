use trellis_core::widget::EventContext;

/// Something to do when a widget is activated, e.g. a button being clicked.
///
/// Closures taking the event context are actions too.
pub trait Action<A> {
    fn perform(&mut self, ctx: &mut EventContext<'_, A>);
}

impl<A, F> Action<A> for F
where
    F: FnMut(&mut EventContext<'_, A>),
{
    fn perform(&mut self, ctx: &mut EventContext<'_, A>) {
        self(ctx)
    }
}
