// This file is generated by rust-protobuf 3.7.2. Do not edit
// .proto file is parsed by pure
// @generated

// https://github.com/rust-lang/rust-clippy/issues/702
#![allow(unknown_lints)]
#![allow(clippy::all)]

#![allow(unused_attributes)]
#![cfg_attr(rustfmt, rustfmt::skip)]

#![allow(dead_code)]
#![allow(missing_docs)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(trivial_casts)]
#![allow(unused_results)]
#![allow(unused_mut)]

//! Generated file from `stream.proto`
// Generated for lite runtime

/// Generated files are compatible only with the same version
/// of protobuf runtime.
const _PROTOBUF_VERSION_CHECK: () = ::protobuf::VERSION_3_7_2;

// @@protoc_insertion_point(message:zif.ipc.Stream)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Stream {
    // special fields
    // @@protoc_insertion_point(special_field:zif.ipc.Stream.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Stream {
    fn default() -> &'a Stream {
        <Stream as ::protobuf::Message>::default_instance()
    }
}

impl Stream {
    pub fn new() -> Stream {
        ::std::default::Default::default()
    }
}

impl ::protobuf::Message for Stream {
    const NAME: &'static str = "Stream";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Stream {
        Stream::new()
    }

    fn clear(&mut self) {
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Stream {
        static instance: Stream = Stream {
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

/// Nested message and enums of message `Stream`
pub mod stream {
    // @@protoc_insertion_point(message:zif.ipc.Stream.File)
    #[derive(PartialEq,Clone,Default,Debug)]
    pub struct File {
        // message fields
        // @@protoc_insertion_point(field:zif.ipc.Stream.File.path)
        pub path: ::std::string::String,
        // @@protoc_insertion_point(field:zif.ipc.Stream.File.size)
        pub size: u64,
        // special fields
        // @@protoc_insertion_point(special_field:zif.ipc.Stream.File.special_fields)
        pub special_fields: ::protobuf::SpecialFields,
    }

    impl<'a> ::std::default::Default for &'a File {
        fn default() -> &'a File {
            <File as ::protobuf::Message>::default_instance()
        }
    }

    impl File {
        pub fn new() -> File {
            ::std::default::Default::default()
        }
    }

    impl ::protobuf::Message for File {
        const NAME: &'static str = "File";

        fn is_initialized(&self) -> bool {
            true
        }

        fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
            while let Some(tag) = is.read_raw_tag_or_eof()? {
                match tag {
                    10 => {
                        self.path = is.read_string()?;
                    },
                    16 => {
                        self.size = is.read_uint64()?;
                    },
                    tag => {
                        ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                    },
                };
            }
            ::std::result::Result::Ok(())
        }

        // Compute sizes of nested messages
        #[allow(unused_variables)]
        fn compute_size(&self) -> u64 {
            let mut my_size = 0;
            if !self.path.is_empty() {
                my_size += ::protobuf::rt::string_size(1, &self.path);
            }
            if self.size != 0 {
                my_size += ::protobuf::rt::uint64_size(2, self.size);
            }
            my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
            self.special_fields.cached_size().set(my_size as u32);
            my_size
        }

        fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
            if !self.path.is_empty() {
                os.write_string(1, &self.path)?;
            }
            if self.size != 0 {
                os.write_uint64(2, self.size)?;
            }
            os.write_unknown_fields(self.special_fields.unknown_fields())?;
            ::std::result::Result::Ok(())
        }

        fn special_fields(&self) -> &::protobuf::SpecialFields {
            &self.special_fields
        }

        fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
            &mut self.special_fields
        }

        fn new() -> File {
            File::new()
        }

        fn clear(&mut self) {
            self.path.clear();
            self.size = 0;
            self.special_fields.clear();
        }

        fn default_instance() -> &'static File {
            static instance: File = File {
                path: ::std::string::String::new(),
                size: 0,
                special_fields: ::protobuf::SpecialFields::new(),
            };
            &instance
        }
    }

    // @@protoc_insertion_point(message:zif.ipc.Stream.Notification)
    #[derive(PartialEq,Clone,Default,Debug)]
    pub struct Notification {
        // message fields
        // @@protoc_insertion_point(field:zif.ipc.Stream.Notification.info_hash)
        pub info_hash: ::std::string::String,
        // @@protoc_insertion_point(field:zif.ipc.Stream.Notification.name)
        pub name: ::std::string::String,
        // @@protoc_insertion_point(field:zif.ipc.Stream.Notification.files)
        pub files: ::std::vec::Vec<File>,
        // @@protoc_insertion_point(field:zif.ipc.Stream.Notification.port)
        pub port: u32,
        // special fields
        // @@protoc_insertion_point(special_field:zif.ipc.Stream.Notification.special_fields)
        pub special_fields: ::protobuf::SpecialFields,
    }

    impl<'a> ::std::default::Default for &'a Notification {
        fn default() -> &'a Notification {
            <Notification as ::protobuf::Message>::default_instance()
        }
    }

    impl Notification {
        pub fn new() -> Notification {
            ::std::default::Default::default()
        }
    }

    impl ::protobuf::Message for Notification {
        const NAME: &'static str = "Notification";

        fn is_initialized(&self) -> bool {
            true
        }

        fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
            while let Some(tag) = is.read_raw_tag_or_eof()? {
                match tag {
                    10 => {
                        self.info_hash = is.read_string()?;
                    },
                    18 => {
                        self.name = is.read_string()?;
                    },
                    26 => {
                        self.files.push(is.read_message()?);
                    },
                    32 => {
                        self.port = is.read_uint32()?;
                    },
                    tag => {
                        ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                    },
                };
            }
            ::std::result::Result::Ok(())
        }

        // Compute sizes of nested messages
        #[allow(unused_variables)]
        fn compute_size(&self) -> u64 {
            let mut my_size = 0;
            if !self.info_hash.is_empty() {
                my_size += ::protobuf::rt::string_size(1, &self.info_hash);
            }
            if !self.name.is_empty() {
                my_size += ::protobuf::rt::string_size(2, &self.name);
            }
            for value in &self.files {
                let len = value.compute_size();
                my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
            };
            if self.port != 0 {
                my_size += ::protobuf::rt::uint32_size(4, self.port);
            }
            my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
            self.special_fields.cached_size().set(my_size as u32);
            my_size
        }

        fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
            if !self.info_hash.is_empty() {
                os.write_string(1, &self.info_hash)?;
            }
            if !self.name.is_empty() {
                os.write_string(2, &self.name)?;
            }
            for v in &self.files {
                ::protobuf::rt::write_message_field_with_cached_size(3, v, os)?;
            };
            if self.port != 0 {
                os.write_uint32(4, self.port)?;
            }
            os.write_unknown_fields(self.special_fields.unknown_fields())?;
            ::std::result::Result::Ok(())
        }

        fn special_fields(&self) -> &::protobuf::SpecialFields {
            &self.special_fields
        }

        fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
            &mut self.special_fields
        }

        fn new() -> Notification {
            Notification::new()
        }

        fn clear(&mut self) {
            self.info_hash.clear();
            self.name.clear();
            self.files.clear();
            self.port = 0;
            self.special_fields.clear();
        }

        fn default_instance() -> &'static Notification {
            static instance: Notification = Notification {
                info_hash: ::std::string::String::new(),
                name: ::std::string::String::new(),
                files: ::std::vec::Vec::new(),
                port: 0,
                special_fields: ::protobuf::SpecialFields::new(),
            };
            &instance
        }
    }

    // @@protoc_insertion_point(message:zif.ipc.Stream.Stats)
    #[derive(PartialEq,Clone,Default,Debug)]
    pub struct Stats {
        // message fields
        // @@protoc_insertion_point(field:zif.ipc.Stream.Stats.progress)
        pub progress: f32,
        // @@protoc_insertion_point(field:zif.ipc.Stream.Stats.downloaded)
        pub downloaded: u64,
        // @@protoc_insertion_point(field:zif.ipc.Stream.Stats.total_size)
        pub total_size: u64,
        // @@protoc_insertion_point(field:zif.ipc.Stream.Stats.finished)
        pub finished: bool,
        // special fields
        // @@protoc_insertion_point(special_field:zif.ipc.Stream.Stats.special_fields)
        pub special_fields: ::protobuf::SpecialFields,
    }

    impl<'a> ::std::default::Default for &'a Stats {
        fn default() -> &'a Stats {
            <Stats as ::protobuf::Message>::default_instance()
        }
    }

    impl Stats {
        pub fn new() -> Stats {
            ::std::default::Default::default()
        }
    }

    impl ::protobuf::Message for Stats {
        const NAME: &'static str = "Stats";

        fn is_initialized(&self) -> bool {
            true
        }

        fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
            while let Some(tag) = is.read_raw_tag_or_eof()? {
                match tag {
                    13 => {
                        self.progress = is.read_float()?;
                    },
                    16 => {
                        self.downloaded = is.read_uint64()?;
                    },
                    24 => {
                        self.total_size = is.read_uint64()?;
                    },
                    32 => {
                        self.finished = is.read_bool()?;
                    },
                    tag => {
                        ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                    },
                };
            }
            ::std::result::Result::Ok(())
        }

        // Compute sizes of nested messages
        #[allow(unused_variables)]
        fn compute_size(&self) -> u64 {
            let mut my_size = 0;
            if self.progress != 0. {
                my_size += 1 + 4;
            }
            if self.downloaded != 0 {
                my_size += ::protobuf::rt::uint64_size(2, self.downloaded);
            }
            if self.total_size != 0 {
                my_size += ::protobuf::rt::uint64_size(3, self.total_size);
            }
            if self.finished != false {
                my_size += 1 + 1;
            }
            my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
            self.special_fields.cached_size().set(my_size as u32);
            my_size
        }

        fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
            if self.progress != 0. {
                os.write_float(1, self.progress)?;
            }
            if self.downloaded != 0 {
                os.write_uint64(2, self.downloaded)?;
            }
            if self.total_size != 0 {
                os.write_uint64(3, self.total_size)?;
            }
            if self.finished != false {
                os.write_bool(4, self.finished)?;
            }
            os.write_unknown_fields(self.special_fields.unknown_fields())?;
            ::std::result::Result::Ok(())
        }

        fn special_fields(&self) -> &::protobuf::SpecialFields {
            &self.special_fields
        }

        fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
            &mut self.special_fields
        }

        fn new() -> Stats {
            Stats::new()
        }

        fn clear(&mut self) {
            self.progress = 0.;
            self.downloaded = 0;
            self.total_size = 0;
            self.finished = false;
            self.special_fields.clear();
        }

        fn default_instance() -> &'static Stats {
            static instance: Stats = Stats {
                progress: 0.,
                downloaded: 0,
                total_size: 0,
                finished: false,
                special_fields: ::protobuf::SpecialFields::new(),
            };
            &instance
        }
    }

    // @@protoc_insertion_point(message:zif.ipc.Stream.Error)
    #[derive(PartialEq,Clone,Default,Debug)]
    pub struct Error {
        // message fields
        // @@protoc_insertion_point(field:zif.ipc.Stream.Error.type)
        pub type_: ::protobuf::EnumOrUnknown<error::Type>,
        // @@protoc_insertion_point(field:zif.ipc.Stream.Error.message)
        pub message: ::std::string::String,
        // special fields
        // @@protoc_insertion_point(special_field:zif.ipc.Stream.Error.special_fields)
        pub special_fields: ::protobuf::SpecialFields,
    }

    impl<'a> ::std::default::Default for &'a Error {
        fn default() -> &'a Error {
            <Error as ::protobuf::Message>::default_instance()
        }
    }

    impl Error {
        pub fn new() -> Error {
            ::std::default::Default::default()
        }
    }

    impl ::protobuf::Message for Error {
        const NAME: &'static str = "Error";

        fn is_initialized(&self) -> bool {
            true
        }

        fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
            while let Some(tag) = is.read_raw_tag_or_eof()? {
                match tag {
                    8 => {
                        self.type_ = is.read_enum_or_unknown()?;
                    },
                    18 => {
                        self.message = is.read_string()?;
                    },
                    tag => {
                        ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                    },
                };
            }
            ::std::result::Result::Ok(())
        }

        // Compute sizes of nested messages
        #[allow(unused_variables)]
        fn compute_size(&self) -> u64 {
            let mut my_size = 0;
            if self.type_ != ::protobuf::EnumOrUnknown::new(error::Type::INVALID_REQUEST) {
                my_size += ::protobuf::rt::int32_size(1, self.type_.value());
            }
            if !self.message.is_empty() {
                my_size += ::protobuf::rt::string_size(2, &self.message);
            }
            my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
            self.special_fields.cached_size().set(my_size as u32);
            my_size
        }

        fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
            if self.type_ != ::protobuf::EnumOrUnknown::new(error::Type::INVALID_REQUEST) {
                os.write_enum(1, ::protobuf::EnumOrUnknown::value(&self.type_))?;
            }
            if !self.message.is_empty() {
                os.write_string(2, &self.message)?;
            }
            os.write_unknown_fields(self.special_fields.unknown_fields())?;
            ::std::result::Result::Ok(())
        }

        fn special_fields(&self) -> &::protobuf::SpecialFields {
            &self.special_fields
        }

        fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
            &mut self.special_fields
        }

        fn new() -> Error {
            Error::new()
        }

        fn clear(&mut self) {
            self.type_ = ::protobuf::EnumOrUnknown::new(error::Type::INVALID_REQUEST);
            self.message.clear();
            self.special_fields.clear();
        }

        fn default_instance() -> &'static Error {
            static instance: Error = Error {
                type_: ::protobuf::EnumOrUnknown::from_i32(0),
                message: ::std::string::String::new(),
                special_fields: ::protobuf::SpecialFields::new(),
            };
            &instance
        }
    }

    /// Nested message and enums of message `Error`
    pub mod error {
        #[derive(Clone,Copy,PartialEq,Eq,Debug,Hash)]
        // @@protoc_insertion_point(enum:zif.ipc.Stream.Error.Type)
        pub enum Type {
            // @@protoc_insertion_point(enum_value:zif.ipc.Stream.Error.Type.INVALID_REQUEST)
            INVALID_REQUEST = 0,
            // @@protoc_insertion_point(enum_value:zif.ipc.Stream.Error.Type.TIMEOUT)
            TIMEOUT = 1,
            // @@protoc_insertion_point(enum_value:zif.ipc.Stream.Error.Type.SERVER)
            SERVER = 2,
            // @@protoc_insertion_point(enum_value:zif.ipc.Stream.Error.Type.TORRENT)
            TORRENT = 3,
            // @@protoc_insertion_point(enum_value:zif.ipc.Stream.Error.Type.CANCELLED)
            CANCELLED = 4,
        }

        impl ::protobuf::Enum for Type {
            const NAME: &'static str = "Type";

            fn value(&self) -> i32 {
                *self as i32
            }

            fn from_i32(value: i32) -> ::std::option::Option<Type> {
                match value {
                    0 => ::std::option::Option::Some(Type::INVALID_REQUEST),
                    1 => ::std::option::Option::Some(Type::TIMEOUT),
                    2 => ::std::option::Option::Some(Type::SERVER),
                    3 => ::std::option::Option::Some(Type::TORRENT),
                    4 => ::std::option::Option::Some(Type::CANCELLED),
                    _ => ::std::option::Option::None
                }
            }

            fn from_str(str: &str) -> ::std::option::Option<Type> {
                match str {
                    "INVALID_REQUEST" => ::std::option::Option::Some(Type::INVALID_REQUEST),
                    "TIMEOUT" => ::std::option::Option::Some(Type::TIMEOUT),
                    "SERVER" => ::std::option::Option::Some(Type::SERVER),
                    "TORRENT" => ::std::option::Option::Some(Type::TORRENT),
                    "CANCELLED" => ::std::option::Option::Some(Type::CANCELLED),
                    _ => ::std::option::Option::None
                }
            }

            const VALUES: &'static [Type] = &[
                Type::INVALID_REQUEST,
                Type::TIMEOUT,
                Type::SERVER,
                Type::TORRENT,
                Type::CANCELLED,
            ];
        }

        impl ::std::default::Default for Type {
            fn default() -> Self {
                Type::INVALID_REQUEST
            }
        }

    }

    #[derive(Clone,Copy,PartialEq,Eq,Debug,Hash)]
    // @@protoc_insertion_point(enum:zif.ipc.Stream.State)
    pub enum State {
        // @@protoc_insertion_point(enum_value:zif.ipc.Stream.State.IDLE)
        IDLE = 0,
        // @@protoc_insertion_point(enum_value:zif.ipc.Stream.State.RESOLVING)
        RESOLVING = 1,
        // @@protoc_insertion_point(enum_value:zif.ipc.Stream.State.BINDING)
        BINDING = 2,
        // @@protoc_insertion_point(enum_value:zif.ipc.Stream.State.READY)
        READY = 3,
        // @@protoc_insertion_point(enum_value:zif.ipc.Stream.State.ERROR)
        ERROR = 4,
    }

    impl ::protobuf::Enum for State {
        const NAME: &'static str = "State";

        fn value(&self) -> i32 {
            *self as i32
        }

        fn from_i32(value: i32) -> ::std::option::Option<State> {
            match value {
                0 => ::std::option::Option::Some(State::IDLE),
                1 => ::std::option::Option::Some(State::RESOLVING),
                2 => ::std::option::Option::Some(State::BINDING),
                3 => ::std::option::Option::Some(State::READY),
                4 => ::std::option::Option::Some(State::ERROR),
                _ => ::std::option::Option::None
            }
        }

        fn from_str(str: &str) -> ::std::option::Option<State> {
            match str {
                "IDLE" => ::std::option::Option::Some(State::IDLE),
                "RESOLVING" => ::std::option::Option::Some(State::RESOLVING),
                "BINDING" => ::std::option::Option::Some(State::BINDING),
                "READY" => ::std::option::Option::Some(State::READY),
                "ERROR" => ::std::option::Option::Some(State::ERROR),
                _ => ::std::option::Option::None
            }
        }

        const VALUES: &'static [State] = &[
            State::IDLE,
            State::RESOLVING,
            State::BINDING,
            State::READY,
            State::ERROR,
        ];
    }

    impl ::std::default::Default for State {
        fn default() -> Self {
            State::IDLE
        }
    }

}

// @@protoc_insertion_point(message:zif.ipc.StreamMagnetRequest)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct StreamMagnetRequest {
    // message fields
    // @@protoc_insertion_point(field:zif.ipc.StreamMagnetRequest.magnet_uri)
    pub magnet_uri: ::std::string::String,
    // special fields
    // @@protoc_insertion_point(special_field:zif.ipc.StreamMagnetRequest.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a StreamMagnetRequest {
    fn default() -> &'a StreamMagnetRequest {
        <StreamMagnetRequest as ::protobuf::Message>::default_instance()
    }
}

impl StreamMagnetRequest {
    pub fn new() -> StreamMagnetRequest {
        ::std::default::Default::default()
    }
}

impl ::protobuf::Message for StreamMagnetRequest {
    const NAME: &'static str = "StreamMagnetRequest";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.magnet_uri = is.read_string()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if !self.magnet_uri.is_empty() {
            my_size += ::protobuf::rt::string_size(1, &self.magnet_uri);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if !self.magnet_uri.is_empty() {
            os.write_string(1, &self.magnet_uri)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> StreamMagnetRequest {
        StreamMagnetRequest::new()
    }

    fn clear(&mut self) {
        self.magnet_uri.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static StreamMagnetRequest {
        static instance: StreamMagnetRequest = StreamMagnetRequest {
            magnet_uri: ::std::string::String::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

// @@protoc_insertion_point(message:zif.ipc.StreamMagnetResponse)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct StreamMagnetResponse {
    // message fields
    // @@protoc_insertion_point(field:zif.ipc.StreamMagnetResponse.result)
    pub result: ::protobuf::EnumOrUnknown<super::message::response::Result>,
    // @@protoc_insertion_point(field:zif.ipc.StreamMagnetResponse.notification)
    pub notification: ::protobuf::MessageField<stream::Notification>,
    // @@protoc_insertion_point(field:zif.ipc.StreamMagnetResponse.error)
    pub error: ::protobuf::MessageField<stream::Error>,
    // special fields
    // @@protoc_insertion_point(special_field:zif.ipc.StreamMagnetResponse.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a StreamMagnetResponse {
    fn default() -> &'a StreamMagnetResponse {
        <StreamMagnetResponse as ::protobuf::Message>::default_instance()
    }
}

impl StreamMagnetResponse {
    pub fn new() -> StreamMagnetResponse {
        ::std::default::Default::default()
    }
}

impl ::protobuf::Message for StreamMagnetResponse {
    const NAME: &'static str = "StreamMagnetResponse";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.result = is.read_enum_or_unknown()?;
                },
                18 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.notification)?;
                },
                26 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.error)?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.result != ::protobuf::EnumOrUnknown::new(super::message::response::Result::OK) {
            my_size += ::protobuf::rt::int32_size(1, self.result.value());
        }
        if let Some(v) = self.notification.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        if let Some(v) = self.error.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.result != ::protobuf::EnumOrUnknown::new(super::message::response::Result::OK) {
            os.write_enum(1, ::protobuf::EnumOrUnknown::value(&self.result))?;
        }
        if let Some(v) = self.notification.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(2, v, os)?;
        }
        if let Some(v) = self.error.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(3, v, os)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> StreamMagnetResponse {
        StreamMagnetResponse::new()
    }

    fn clear(&mut self) {
        self.result = ::protobuf::EnumOrUnknown::new(super::message::response::Result::OK);
        self.notification.clear();
        self.error.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static StreamMagnetResponse {
        static instance: StreamMagnetResponse = StreamMagnetResponse {
            result: ::protobuf::EnumOrUnknown::from_i32(0),
            notification: ::protobuf::MessageField::none(),
            error: ::protobuf::MessageField::none(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

// @@protoc_insertion_point(message:zif.ipc.StopStreamRequest)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct StopStreamRequest {
    // special fields
    // @@protoc_insertion_point(special_field:zif.ipc.StopStreamRequest.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a StopStreamRequest {
    fn default() -> &'a StopStreamRequest {
        <StopStreamRequest as ::protobuf::Message>::default_instance()
    }
}

impl StopStreamRequest {
    pub fn new() -> StopStreamRequest {
        ::std::default::Default::default()
    }
}

impl ::protobuf::Message for StopStreamRequest {
    const NAME: &'static str = "StopStreamRequest";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> StopStreamRequest {
        StopStreamRequest::new()
    }

    fn clear(&mut self) {
        self.special_fields.clear();
    }

    fn default_instance() -> &'static StopStreamRequest {
        static instance: StopStreamRequest = StopStreamRequest {
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

// @@protoc_insertion_point(message:zif.ipc.StopStreamResponse)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct StopStreamResponse {
    // message fields
    // @@protoc_insertion_point(field:zif.ipc.StopStreamResponse.result)
    pub result: ::protobuf::EnumOrUnknown<super::message::response::Result>,
    // special fields
    // @@protoc_insertion_point(special_field:zif.ipc.StopStreamResponse.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a StopStreamResponse {
    fn default() -> &'a StopStreamResponse {
        <StopStreamResponse as ::protobuf::Message>::default_instance()
    }
}

impl StopStreamResponse {
    pub fn new() -> StopStreamResponse {
        ::std::default::Default::default()
    }
}

impl ::protobuf::Message for StopStreamResponse {
    const NAME: &'static str = "StopStreamResponse";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.result = is.read_enum_or_unknown()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.result != ::protobuf::EnumOrUnknown::new(super::message::response::Result::OK) {
            my_size += ::protobuf::rt::int32_size(1, self.result.value());
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.result != ::protobuf::EnumOrUnknown::new(super::message::response::Result::OK) {
            os.write_enum(1, ::protobuf::EnumOrUnknown::value(&self.result))?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> StopStreamResponse {
        StopStreamResponse::new()
    }

    fn clear(&mut self) {
        self.result = ::protobuf::EnumOrUnknown::new(super::message::response::Result::OK);
        self.special_fields.clear();
    }

    fn default_instance() -> &'static StopStreamResponse {
        static instance: StopStreamResponse = StopStreamResponse {
            result: ::protobuf::EnumOrUnknown::from_i32(0),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

// @@protoc_insertion_point(message:zif.ipc.StreamStateRequest)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct StreamStateRequest {
    // special fields
    // @@protoc_insertion_point(special_field:zif.ipc.StreamStateRequest.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a StreamStateRequest {
    fn default() -> &'a StreamStateRequest {
        <StreamStateRequest as ::protobuf::Message>::default_instance()
    }
}

impl StreamStateRequest {
    pub fn new() -> StreamStateRequest {
        ::std::default::Default::default()
    }
}

impl ::protobuf::Message for StreamStateRequest {
    const NAME: &'static str = "StreamStateRequest";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> StreamStateRequest {
        StreamStateRequest::new()
    }

    fn clear(&mut self) {
        self.special_fields.clear();
    }

    fn default_instance() -> &'static StreamStateRequest {
        static instance: StreamStateRequest = StreamStateRequest {
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

// @@protoc_insertion_point(message:zif.ipc.StreamStateResponse)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct StreamStateResponse {
    // message fields
    // @@protoc_insertion_point(field:zif.ipc.StreamStateResponse.state)
    pub state: ::protobuf::EnumOrUnknown<stream::State>,
    // @@protoc_insertion_point(field:zif.ipc.StreamStateResponse.notification)
    pub notification: ::protobuf::MessageField<stream::Notification>,
    // @@protoc_insertion_point(field:zif.ipc.StreamStateResponse.stats)
    pub stats: ::protobuf::MessageField<stream::Stats>,
    // special fields
    // @@protoc_insertion_point(special_field:zif.ipc.StreamStateResponse.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a StreamStateResponse {
    fn default() -> &'a StreamStateResponse {
        <StreamStateResponse as ::protobuf::Message>::default_instance()
    }
}

impl StreamStateResponse {
    pub fn new() -> StreamStateResponse {
        ::std::default::Default::default()
    }
}

impl ::protobuf::Message for StreamStateResponse {
    const NAME: &'static str = "StreamStateResponse";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.state = is.read_enum_or_unknown()?;
                },
                18 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.notification)?;
                },
                26 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.stats)?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.state != ::protobuf::EnumOrUnknown::new(stream::State::IDLE) {
            my_size += ::protobuf::rt::int32_size(1, self.state.value());
        }
        if let Some(v) = self.notification.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        if let Some(v) = self.stats.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.state != ::protobuf::EnumOrUnknown::new(stream::State::IDLE) {
            os.write_enum(1, ::protobuf::EnumOrUnknown::value(&self.state))?;
        }
        if let Some(v) = self.notification.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(2, v, os)?;
        }
        if let Some(v) = self.stats.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(3, v, os)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> StreamStateResponse {
        StreamStateResponse::new()
    }

    fn clear(&mut self) {
        self.state = ::protobuf::EnumOrUnknown::new(stream::State::IDLE);
        self.notification.clear();
        self.stats.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static StreamStateResponse {
        static instance: StreamStateResponse = StreamStateResponse {
            state: ::protobuf::EnumOrUnknown::from_i32(0),
            notification: ::protobuf::MessageField::none(),
            stats: ::protobuf::MessageField::none(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

// @@protoc_insertion_point(message:zif.ipc.SubscribeTorrentEventsRequest)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct SubscribeTorrentEventsRequest {
    // special fields
    // @@protoc_insertion_point(special_field:zif.ipc.SubscribeTorrentEventsRequest.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a SubscribeTorrentEventsRequest {
    fn default() -> &'a SubscribeTorrentEventsRequest {
        <SubscribeTorrentEventsRequest as ::protobuf::Message>::default_instance()
    }
}

impl SubscribeTorrentEventsRequest {
    pub fn new() -> SubscribeTorrentEventsRequest {
        ::std::default::Default::default()
    }
}

impl ::protobuf::Message for SubscribeTorrentEventsRequest {
    const NAME: &'static str = "SubscribeTorrentEventsRequest";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> SubscribeTorrentEventsRequest {
        SubscribeTorrentEventsRequest::new()
    }

    fn clear(&mut self) {
        self.special_fields.clear();
    }

    fn default_instance() -> &'static SubscribeTorrentEventsRequest {
        static instance: SubscribeTorrentEventsRequest = SubscribeTorrentEventsRequest {
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

// @@protoc_insertion_point(message:zif.ipc.SubscribeTorrentEventsResponse)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct SubscribeTorrentEventsResponse {
    // message fields
    // @@protoc_insertion_point(field:zif.ipc.SubscribeTorrentEventsResponse.subscription_id)
    pub subscription_id: u32,
    // special fields
    // @@protoc_insertion_point(special_field:zif.ipc.SubscribeTorrentEventsResponse.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a SubscribeTorrentEventsResponse {
    fn default() -> &'a SubscribeTorrentEventsResponse {
        <SubscribeTorrentEventsResponse as ::protobuf::Message>::default_instance()
    }
}

impl SubscribeTorrentEventsResponse {
    pub fn new() -> SubscribeTorrentEventsResponse {
        ::std::default::Default::default()
    }
}

impl ::protobuf::Message for SubscribeTorrentEventsResponse {
    const NAME: &'static str = "SubscribeTorrentEventsResponse";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.subscription_id = is.read_uint32()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.subscription_id != 0 {
            my_size += ::protobuf::rt::uint32_size(1, self.subscription_id);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.subscription_id != 0 {
            os.write_uint32(1, self.subscription_id)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> SubscribeTorrentEventsResponse {
        SubscribeTorrentEventsResponse::new()
    }

    fn clear(&mut self) {
        self.subscription_id = 0;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static SubscribeTorrentEventsResponse {
        static instance: SubscribeTorrentEventsResponse = SubscribeTorrentEventsResponse {
            subscription_id: 0,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

// @@protoc_insertion_point(message:zif.ipc.UnsubscribeTorrentEventsRequest)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct UnsubscribeTorrentEventsRequest {
    // message fields
    // @@protoc_insertion_point(field:zif.ipc.UnsubscribeTorrentEventsRequest.subscription_id)
    pub subscription_id: u32,
    // special fields
    // @@protoc_insertion_point(special_field:zif.ipc.UnsubscribeTorrentEventsRequest.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a UnsubscribeTorrentEventsRequest {
    fn default() -> &'a UnsubscribeTorrentEventsRequest {
        <UnsubscribeTorrentEventsRequest as ::protobuf::Message>::default_instance()
    }
}

impl UnsubscribeTorrentEventsRequest {
    pub fn new() -> UnsubscribeTorrentEventsRequest {
        ::std::default::Default::default()
    }
}

impl ::protobuf::Message for UnsubscribeTorrentEventsRequest {
    const NAME: &'static str = "UnsubscribeTorrentEventsRequest";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.subscription_id = is.read_uint32()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.subscription_id != 0 {
            my_size += ::protobuf::rt::uint32_size(1, self.subscription_id);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.subscription_id != 0 {
            os.write_uint32(1, self.subscription_id)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> UnsubscribeTorrentEventsRequest {
        UnsubscribeTorrentEventsRequest::new()
    }

    fn clear(&mut self) {
        self.subscription_id = 0;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static UnsubscribeTorrentEventsRequest {
        static instance: UnsubscribeTorrentEventsRequest = UnsubscribeTorrentEventsRequest {
            subscription_id: 0,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

// @@protoc_insertion_point(message:zif.ipc.UnsubscribeTorrentEventsResponse)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct UnsubscribeTorrentEventsResponse {
    // message fields
    // @@protoc_insertion_point(field:zif.ipc.UnsubscribeTorrentEventsResponse.result)
    pub result: ::protobuf::EnumOrUnknown<super::message::response::Result>,
    // special fields
    // @@protoc_insertion_point(special_field:zif.ipc.UnsubscribeTorrentEventsResponse.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a UnsubscribeTorrentEventsResponse {
    fn default() -> &'a UnsubscribeTorrentEventsResponse {
        <UnsubscribeTorrentEventsResponse as ::protobuf::Message>::default_instance()
    }
}

impl UnsubscribeTorrentEventsResponse {
    pub fn new() -> UnsubscribeTorrentEventsResponse {
        ::std::default::Default::default()
    }
}

impl ::protobuf::Message for UnsubscribeTorrentEventsResponse {
    const NAME: &'static str = "UnsubscribeTorrentEventsResponse";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.result = is.read_enum_or_unknown()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.result != ::protobuf::EnumOrUnknown::new(super::message::response::Result::OK) {
            my_size += ::protobuf::rt::int32_size(1, self.result.value());
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.result != ::protobuf::EnumOrUnknown::new(super::message::response::Result::OK) {
            os.write_enum(1, ::protobuf::EnumOrUnknown::value(&self.result))?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> UnsubscribeTorrentEventsResponse {
        UnsubscribeTorrentEventsResponse::new()
    }

    fn clear(&mut self) {
        self.result = ::protobuf::EnumOrUnknown::new(super::message::response::Result::OK);
        self.special_fields.clear();
    }

    fn default_instance() -> &'static UnsubscribeTorrentEventsResponse {
        static instance: UnsubscribeTorrentEventsResponse = UnsubscribeTorrentEventsResponse {
            result: ::protobuf::EnumOrUnknown::from_i32(0),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

// @@protoc_insertion_point(message:zif.ipc.TorrentEvent)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct TorrentEvent {
    // message fields
    // @@protoc_insertion_point(field:zif.ipc.TorrentEvent.subscription_id)
    pub subscription_id: u32,
    // @@protoc_insertion_point(field:zif.ipc.TorrentEvent.type)
    pub type_: ::protobuf::EnumOrUnknown<torrent_event::Type>,
    // @@protoc_insertion_point(field:zif.ipc.TorrentEvent.notification)
    pub notification: ::protobuf::MessageField<stream::Notification>,
    // @@protoc_insertion_point(field:zif.ipc.TorrentEvent.error)
    pub error: ::protobuf::MessageField<stream::Error>,
    // special fields
    // @@protoc_insertion_point(special_field:zif.ipc.TorrentEvent.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a TorrentEvent {
    fn default() -> &'a TorrentEvent {
        <TorrentEvent as ::protobuf::Message>::default_instance()
    }
}

impl TorrentEvent {
    pub fn new() -> TorrentEvent {
        ::std::default::Default::default()
    }
}

impl ::protobuf::Message for TorrentEvent {
    const NAME: &'static str = "TorrentEvent";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.subscription_id = is.read_uint32()?;
                },
                16 => {
                    self.type_ = is.read_enum_or_unknown()?;
                },
                26 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.notification)?;
                },
                34 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.error)?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.subscription_id != 0 {
            my_size += ::protobuf::rt::uint32_size(1, self.subscription_id);
        }
        if self.type_ != ::protobuf::EnumOrUnknown::new(torrent_event::Type::READY) {
            my_size += ::protobuf::rt::int32_size(2, self.type_.value());
        }
        if let Some(v) = self.notification.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        if let Some(v) = self.error.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.subscription_id != 0 {
            os.write_uint32(1, self.subscription_id)?;
        }
        if self.type_ != ::protobuf::EnumOrUnknown::new(torrent_event::Type::READY) {
            os.write_enum(2, ::protobuf::EnumOrUnknown::value(&self.type_))?;
        }
        if let Some(v) = self.notification.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(3, v, os)?;
        }
        if let Some(v) = self.error.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(4, v, os)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> TorrentEvent {
        TorrentEvent::new()
    }

    fn clear(&mut self) {
        self.subscription_id = 0;
        self.type_ = ::protobuf::EnumOrUnknown::new(torrent_event::Type::READY);
        self.notification.clear();
        self.error.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static TorrentEvent {
        static instance: TorrentEvent = TorrentEvent {
            subscription_id: 0,
            type_: ::protobuf::EnumOrUnknown::from_i32(0),
            notification: ::protobuf::MessageField::none(),
            error: ::protobuf::MessageField::none(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

/// Nested message and enums of message `TorrentEvent`
pub mod torrent_event {
    #[derive(Clone,Copy,PartialEq,Eq,Debug,Hash)]
    // @@protoc_insertion_point(enum:zif.ipc.TorrentEvent.Type)
    pub enum Type {
        // @@protoc_insertion_point(enum_value:zif.ipc.TorrentEvent.Type.READY)
        READY = 0,
        // @@protoc_insertion_point(enum_value:zif.ipc.TorrentEvent.Type.FAILED)
        FAILED = 1,
    }

    impl ::protobuf::Enum for Type {
        const NAME: &'static str = "Type";

        fn value(&self) -> i32 {
            *self as i32
        }

        fn from_i32(value: i32) -> ::std::option::Option<Type> {
            match value {
                0 => ::std::option::Option::Some(Type::READY),
                1 => ::std::option::Option::Some(Type::FAILED),
                _ => ::std::option::Option::None
            }
        }

        fn from_str(str: &str) -> ::std::option::Option<Type> {
            match str {
                "READY" => ::std::option::Option::Some(Type::READY),
                "FAILED" => ::std::option::Option::Some(Type::FAILED),
                _ => ::std::option::Option::None
            }
        }

        const VALUES: &'static [Type] = &[
            Type::READY,
            Type::FAILED,
        ];
    }

    impl ::std::default::Default for Type {
        fn default() -> Self {
            Type::READY
        }
    }

}
