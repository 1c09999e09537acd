diesel::table! {
    venues (id) {
        id -> Integer,
        name -> Text,
        city -> Text,
        state -> Text,
        address -> Text,
        phone -> Text,
        genres -> Text,
        website_link -> Text,
        facebook_link -> Text,
        image_link -> Text,
        seeking_talent -> Bool,
        seeking_description -> Nullable<Text>,
    }
}

diesel::table! {
    artists (id) {
        id -> Integer,
        name -> Text,
        city -> Text,
        state -> Text,
        phone -> Text,
        genres -> Text,
        website_link -> Text,
        facebook_link -> Text,
        image_link -> Text,
        seeking_venue -> Bool,
        seeking_description -> Nullable<Text>,
    }
}

diesel::table! {
    shows (id) {
        id -> Integer,
        artist_id -> Integer,
        venue_id -> Integer,
        start_time -> Timestamp,
    }
}

diesel::joinable!(shows -> artists (artist_id));
diesel::joinable!(shows -> venues (venue_id));

diesel::allow_tables_to_appear_in_same_query!(artists, shows, venues,);
