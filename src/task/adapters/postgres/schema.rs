//! Diesel schema for task persistence.

diesel::table! {
    /// Reminder tasks.
    scheduler (id) {
        /// Store-assigned task identifier.
        id -> Int8,
        /// Due date in `YYYYMMDD` form.
        #[max_length = 8]
        date -> Varchar,
        /// Display title.
        title -> Text,
        /// Free-form comment.
        comment -> Text,
        /// Recurrence rule in `repeat` grammar form.
        #[max_length = 128]
        repeat -> Varchar,
    }
}
