//! Layout implementations for tuples.
//!
//! A tuple is laid out like a struct whose fields are named by position.

use crate::{ByteOrder, Error, Field, Layout, Shape};
use bytes::{Buf, BufMut};
use paste::paste;

macro_rules! impl_layout_for_tuple {
    ($($index:literal),*) => {
        paste! {
            impl<$( [<T $index>]: Layout ),*> Layout for ( $( [<T $index>], )* ) {
                fn shape() -> Shape {
                    Shape::structure(
                        "",
                        vec![ $( Field::new(stringify!($index), [<T $index>]::shape()), )* ],
                    )
                }

                #[inline]
                fn write_layout(&self, buf: &mut impl BufMut, order: ByteOrder) -> Result<(), Error> {
                    $( self.$index.write_layout(buf, order)?; )*
                    Ok(())
                }

                #[inline]
                fn read_layout(buf: &mut impl Buf, order: ByteOrder) -> Result<Self, Error> {
                    Ok(( $( [<T $index>]::read_layout(buf, order)?, )* ))
                }
            }
        }
    };
}

// Generate implementations for tuple sizes 1 through 12
impl_layout_for_tuple!(0);
impl_layout_for_tuple!(0, 1);
impl_layout_for_tuple!(0, 1, 2);
impl_layout_for_tuple!(0, 1, 2, 3);
impl_layout_for_tuple!(0, 1, 2, 3, 4);
impl_layout_for_tuple!(0, 1, 2, 3, 4, 5);
impl_layout_for_tuple!(0, 1, 2, 3, 4, 5, 6);
impl_layout_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7);
impl_layout_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8);
impl_layout_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
impl_layout_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
impl_layout_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);
