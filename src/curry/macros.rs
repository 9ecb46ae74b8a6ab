//! Implementation generators for the typed currying surface.
//!
//! Rust has no call-shape overloading, so each overload of the curried
//! callable is an [`Apply`](super::Apply) implementation on a distinct
//! `(Args, Bound, Next)` combination. The macros below expand one
//! implementation per combination. Type parameter names double as binding
//! names through `paste` (`A` binds `a`, `B` binds `b`, ...), which keeps
//! argument order visible in the expansion.

/// Implements [`Callable`](super::Callable) for `Fn` types of one arity.
macro_rules! impl_callable {
    ($arity:literal; $($parameter:ident),+) => {
        ::paste::paste! {
            impl<Function, R, $($parameter),+> Callable<($($parameter,)+)> for Function
            where
                Function: Fn($($parameter),+) -> R,
            {
                const ARITY: usize = $arity;
                type Output = R;

                #[inline]
                fn call_with(&self, ($([<$parameter:lower>],)+): ($($parameter,)+)) -> R {
                    self($([<$parameter:lower>]),+)
                }
            }
        }
    };
}

/// Implements [`Apply`](super::Apply) for one split of the pending parameters.
///
/// - `complete`: bound ++ next covers every parameter, the target fires
///   through [`Callable::call_with`](super::Callable::call_with).
/// - `partial`: bound ++ next is still a strict prefix, a new `Curried`
///   holding the extended tuple is returned.
macro_rules! impl_apply {
    (complete [$($parameter:ident),+] [$($bound:ident),*] [$($next:ident),+]) => {
        ::paste::paste! {
            impl<Function, $($parameter),+> Apply<($($next,)+)>
                for Curried<Function, ($($parameter,)+), ($($bound,)*)>
            where
                Function: Callable<($($parameter,)+)>,
                $($bound: Clone,)*
            {
                type Output = <Function as Callable<($($parameter,)+)>>::Output;

                #[inline]
                #[allow(clippy::let_unit_value, clippy::unused_unit)]
                fn apply(&self, next: ($($next,)+)) -> Self::Output {
                    let ($([<$bound:lower>],)*) = self.bound.clone();
                    let ($([<$next:lower>],)+) = next;
                    <Function as Callable<($($parameter,)+)>>::call_with(
                        &self.function,
                        ($([<$parameter:lower>],)+),
                    )
                }
            }
        }
    };
    (partial [$($parameter:ident),+] [$($bound:ident),*] [$($next:ident),+]) => {
        ::paste::paste! {
            impl<Function, $($parameter),+> Apply<($($next,)+)>
                for Curried<Function, ($($parameter,)+), ($($bound,)*)>
            where
                $($bound: Clone,)*
            {
                type Output = Curried<Function, ($($parameter,)+), ($($bound,)* $($next,)+)>;

                #[inline]
                #[allow(clippy::let_unit_value, clippy::unused_unit)]
                fn apply(&self, next: ($($next,)+)) -> Self::Output {
                    let ($([<$bound:lower>],)*) = self.bound.clone();
                    let ($([<$next:lower>],)+) = next;
                    Curried {
                        function: ::std::rc::Rc::clone(&self.function),
                        bound: ($([<$bound:lower>],)* $([<$next:lower>],)+),
                        arguments: ::std::marker::PhantomData,
                    }
                }
            }
        }
    };
}

/// Marks every strict prefix of a parameter tuple as a valid preset.
macro_rules! impl_prefix {
    (@count) => { 0 };
    (@count $head:ident $($tail:ident)*) => { 1 + impl_prefix!(@count $($tail)*) };
    (@one [$($parameter:ident),+] [$($bound:ident),*]) => {
        impl<$($parameter),+> Prefix<($($parameter,)+)> for ($($bound,)*) {
            const LENGTH: usize = impl_prefix!(@count $($bound)*);
        }
    };
    ($parameters:tt $([$($bound:ident),*])+) => {
        $( impl_prefix!(@one $parameters [$($bound),*]); )+
    };
}
