// This defines the `Accessor` trait, used to define unified getters/setters for commonly
// accessed tag values.
//
// Usage:
//
// accessor_trait! {
//     [field_name]<type>
// }
//
// * `field_name` is the name of the method to access the field. If a name consists of multiple segments,
// such as `track_number`, they should be separated by spaces like so: [track number]<type>.
//
// * `type` is the return type for `Accessor::field_name`, and the type taken by the setter.
macro_rules! accessor_trait {
	($([$($name:tt)+] < $ty:ty >),+ $(,)?) => {
		/// Provides accessors for common items
		///
		/// Every accessor is backed by a [`FieldKey`](crate::field::FieldKey). Note that the setters
		/// **overwrite**, not append. If multi-value support is needed, see
		/// [`Id3v2Tag::add_field()`](crate::id3v2::Id3v2Tag::add_field).
		pub trait Accessor {
			$(
				accessor_trait! { @GET_METHOD [$($name)+] Option<$ty> }

				accessor_trait! { @SET_METHOD [$($name)+] $ty }

				accessor_trait! { @REMOVE_METHOD [$($name)+] }
			)+
		}
	};
	(@GET_METHOD [$name:tt $($other:tt)*] Option<$ret_ty:ty>) => {
		paste::paste! {
			#[doc = "Returns the " $name $(" " $other)* "."]
			///
			/// If the field has multiple values, this will only return the first.
			///
			/// # Example
			///
			/// ```rust
			/// use tagwright::Accessor;
			/// use tagwright::id3v2::{Id3v2Tag, Id3v2Version};
			///
			/// let tag = Id3v2Tag::new(Id3v2Version::V4);
			#[doc = "assert_eq!(tag." $name $(_ $other)* "(), None);"]
			/// ```
			fn [<
				$name $(_ $other)*
			>] (&self) -> Option<$ret_ty>;
		}
	};
	(@SET_METHOD [$name:tt $($other:tt)*] $owned_ty:ty) => {
		paste::paste! {
			#[doc = "Sets the " $name $(" " $other)* "."]
			///
			/// This will remove **all** existing values, and replace them with `value`.
			///
			/// # Example
			///
			/// ```rust,ignore
			/// use tagwright::Accessor;
			///
			#[doc = "tag.set_" $name $(_ $other)* "(value);"]
			///
			#[doc = "assert_eq!(tag." $name $(_ $other)* "(), Some(value));"]
			/// ```
			fn [<
				set_ $name $(_ $other)*
			>] (&mut self, value: $owned_ty);
		}
	};
	(@REMOVE_METHOD [$name:tt $($other:tt)*]) => {
		paste::paste! {
			#[doc = "Removes the " $name $(" " $other)*]
			///
			/// # Example
			///
			/// ```rust,ignore
			/// use tagwright::Accessor;
			///
			#[doc = "tag.set_" $name $(_ $other)* "(value);"]
			///
			#[doc = "assert_eq!(tag." $name $(_ $other)* "(), Some(value));"]
			///
			#[doc = "tag.remove_" $name $(_ $other)* "();"]
			///
			#[doc = "assert_eq!(tag." $name $(_ $other)* "(), None);"]
			/// ```
			fn [<
				remove_ $name $(_ $other)*
			>] (&mut self);
		}
	};
}

accessor_trait! {
	[artist]<String>, [title      ]<String>,
	[album ]<String>, [genre      ]<String>,
	[track ]<u32>,    [track total]<u32>,
	[disk  ]<u32>,    [disk total ]<u32>,
	[comment]<String>,
}
