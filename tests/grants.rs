//! Port of the share-grant operations: options values, their validation and
//! the decoding of `SHOW GRANTS` rows into domain grants. The transport that
//! would execute the statements stays out of scope.
#[cfg(test)]
mod tests {
    use ddlkit::{
        Error, FromRow, Identifier, Result, Row, SqlStruct, Validate, decode_rows,
        every_value_nil, exactly_one_value_set, valid_object_identifier, validated_sql,
    };
    use time::{OffsetDateTime, macros::datetime};

    #[derive(SqlStruct)]
    struct OnTable {
        #[ddl(identifier, name = "TABLE")]
        name: Option<Identifier>,
        #[ddl(identifier, name = "ALL TABLES IN SCHEMA")]
        all_in_schema: Option<Identifier>,
    }

    impl Validate for OnTable {
        fn validate(&self) -> Result<()> {
            if !exactly_one_value_set(&[&self.name, &self.all_in_schema]) {
                return Err(Error::validation(
                    "only one of name or all_in_schema can be set",
                ));
            }
            Ok(())
        }
    }

    #[derive(SqlStruct)]
    struct GrantPrivilegeToShareOn {
        #[ddl(identifier, name = "DATABASE")]
        database: Option<Identifier>,
        #[ddl(identifier, name = "SCHEMA")]
        schema: Option<Identifier>,
        #[ddl(identifier, name = "FUNCTION")]
        function: Option<Identifier>,
        #[ddl(keyword)]
        table: Option<OnTable>,
        #[ddl(identifier, name = "VIEW")]
        view: Option<Identifier>,
    }

    impl Validate for GrantPrivilegeToShareOn {
        fn validate(&self) -> Result<()> {
            if !exactly_one_value_set(&[
                &self.database,
                &self.schema,
                &self.function,
                &self.table,
                &self.view,
            ]) {
                return Err(Error::validation(
                    "only one of database, schema, function, table, or view can be set",
                ));
            }
            if let Some(table) = &self.table {
                table.validate()?;
            }
            Ok(())
        }
    }

    #[derive(SqlStruct)]
    struct GrantPrivilegeToShareOptions {
        #[ddl(static, name = "GRANT")]
        _grant: bool,
        #[ddl(keyword)]
        object_privilege: String,
        #[ddl(keyword, name = "ON")]
        on: Option<GrantPrivilegeToShareOn>,
        #[ddl(identifier, name = "TO SHARE")]
        to: Identifier,
    }

    impl Validate for GrantPrivilegeToShareOptions {
        fn validate(&self) -> Result<()> {
            if !valid_object_identifier(&self.to) {
                return Err(Error::InvalidIdentifier);
            }
            let Some(on) = &self.on else {
                return Err(Error::validation("on and object_privilege are required"));
            };
            if self.object_privilege.is_empty() {
                return Err(Error::validation("on and object_privilege are required"));
            }
            on.validate()
        }
    }

    #[derive(SqlStruct)]
    struct OnView {
        #[ddl(identifier, name = "VIEW")]
        name: Option<Identifier>,
        #[ddl(identifier, name = "ALL VIEWS IN SCHEMA")]
        all_in_schema: Option<Identifier>,
    }

    impl Validate for OnView {
        fn validate(&self) -> Result<()> {
            if !exactly_one_value_set(&[&self.name, &self.all_in_schema]) {
                return Err(Error::validation(
                    "only one of name or all_in_schema can be set",
                ));
            }
            Ok(())
        }
    }

    #[derive(SqlStruct)]
    struct RevokePrivilegeFromShareOn {
        #[ddl(identifier, name = "DATABASE")]
        database: Option<Identifier>,
        #[ddl(identifier, name = "SCHEMA")]
        schema: Option<Identifier>,
        #[ddl(keyword)]
        table: Option<OnTable>,
        #[ddl(keyword)]
        view: Option<OnView>,
    }

    impl Validate for RevokePrivilegeFromShareOn {
        fn validate(&self) -> Result<()> {
            if !exactly_one_value_set(&[&self.database, &self.schema, &self.table, &self.view]) {
                return Err(Error::validation(
                    "only one of database, schema, table, or view can be set",
                ));
            }
            if let Some(table) = &self.table {
                return table.validate();
            }
            if let Some(view) = &self.view {
                return view.validate();
            }
            Ok(())
        }
    }

    #[derive(SqlStruct)]
    struct RevokePrivilegeFromShareOptions {
        #[ddl(static, name = "REVOKE")]
        _revoke: bool,
        #[ddl(keyword)]
        object_privilege: String,
        #[ddl(keyword, name = "ON")]
        on: Option<RevokePrivilegeFromShareOn>,
        #[ddl(identifier, name = "FROM SHARE")]
        from: Identifier,
    }

    impl Validate for RevokePrivilegeFromShareOptions {
        fn validate(&self) -> Result<()> {
            if !valid_object_identifier(&self.from) {
                return Err(Error::InvalidIdentifier);
            }
            let Some(on) = &self.on else {
                return Err(Error::validation("on and object_privilege are required"));
            };
            if self.object_privilege.is_empty() {
                return Err(Error::validation("on and object_privilege are required"));
            }
            on.validate()
        }
    }

    #[derive(SqlStruct)]
    struct ShowGrantsTo {
        #[ddl(identifier, name = "ROLE")]
        role: Option<Identifier>,
        #[ddl(identifier, name = "USER")]
        user: Option<Identifier>,
        #[ddl(identifier, name = "SHARE")]
        share: Option<Identifier>,
    }

    #[derive(SqlStruct)]
    struct ShowGrantsOn {
        #[ddl(keyword, name = "ACCOUNT")]
        account: Option<bool>,
        #[ddl(keyword)]
        object: Option<ObjectRef>,
    }

    #[derive(SqlStruct)]
    struct ObjectRef {
        #[ddl(keyword)]
        object_type: String,
        #[ddl(identifier)]
        name: Option<Identifier>,
    }

    #[derive(SqlStruct)]
    struct ShowGrantsOf {
        #[ddl(identifier, name = "ROLE")]
        role: Option<Identifier>,
        #[ddl(identifier, name = "SHARE")]
        share: Option<Identifier>,
    }

    #[derive(SqlStruct, Default)]
    struct ShowGrantsOptions {
        #[ddl(static, name = "SHOW")]
        _show: bool,
        #[ddl(static, name = "GRANTS")]
        _grants: bool,
        #[ddl(keyword, name = "ON")]
        on: Option<ShowGrantsOn>,
        #[ddl(keyword, name = "TO")]
        to: Option<ShowGrantsTo>,
        #[ddl(keyword, name = "OF")]
        of: Option<ShowGrantsOf>,
    }

    impl Validate for ShowGrantsOptions {
        fn validate(&self) -> Result<()> {
            if every_value_nil(&[&self.on, &self.to, &self.of]) {
                return Err(Error::validation("at least one of on, to, or of is required"));
            }
            if !exactly_one_value_set(&[&self.on, &self.to, &self.of]) {
                return Err(Error::validation("only one of on, to, or of can be set"));
            }
            Ok(())
        }
    }

    #[test]
    fn grant_privilege_to_share() {
        let opts = GrantPrivilegeToShareOptions {
            _grant: true,
            object_privilege: "USAGE".into(),
            on: Some(GrantPrivilegeToShareOn {
                database: Some(Identifier::account_object("D1")),
                schema: None,
                function: None,
                table: None,
                view: None,
            }),
            to: Identifier::account_object("S1"),
        };
        assert_eq!(
            validated_sql(&opts).unwrap(),
            r#"GRANT USAGE ON DATABASE "D1" TO SHARE "S1""#
        );
    }

    #[test]
    fn grant_on_all_tables_in_schema() {
        let opts = GrantPrivilegeToShareOptions {
            _grant: true,
            object_privilege: "SELECT".into(),
            on: Some(GrantPrivilegeToShareOn {
                database: None,
                schema: None,
                function: None,
                table: Some(OnTable {
                    name: None,
                    all_in_schema: Some(Identifier::schema("D1", "S1")),
                }),
                view: None,
            }),
            to: Identifier::account_object("S2"),
        };
        assert_eq!(
            validated_sql(&opts).unwrap(),
            r#"GRANT SELECT ON ALL TABLES IN SCHEMA "D1"."S1" TO SHARE "S2""#
        );
    }

    #[test]
    fn grant_rejects_multiple_targets() {
        let opts = GrantPrivilegeToShareOptions {
            _grant: true,
            object_privilege: "USAGE".into(),
            on: Some(GrantPrivilegeToShareOn {
                database: Some(Identifier::account_object("D1")),
                schema: Some(Identifier::schema("D1", "S1")),
                function: None,
                table: None,
                view: None,
            }),
            to: Identifier::account_object("S1"),
        };
        assert!(matches!(validated_sql(&opts), Err(Error::Validation(..))));
    }

    #[test]
    fn grant_rejects_invalid_share_identifier() {
        let opts = GrantPrivilegeToShareOptions {
            _grant: true,
            object_privilege: "USAGE".into(),
            on: None,
            to: Identifier::account_object("a".repeat(256)),
        };
        assert!(matches!(
            validated_sql(&opts),
            Err(Error::InvalidIdentifier)
        ));
    }

    #[test]
    fn revoke_privilege_from_share() {
        let opts = RevokePrivilegeFromShareOptions {
            _revoke: true,
            object_privilege: "USAGE".into(),
            on: Some(RevokePrivilegeFromShareOn {
                database: Some(Identifier::account_object("D1")),
                schema: None,
                table: None,
                view: None,
            }),
            from: Identifier::account_object("S1"),
        };
        assert_eq!(
            validated_sql(&opts).unwrap(),
            r#"REVOKE USAGE ON DATABASE "D1" FROM SHARE "S1""#
        );
    }

    #[test]
    fn revoke_on_all_views_in_schema() {
        let opts = RevokePrivilegeFromShareOptions {
            _revoke: true,
            object_privilege: "SELECT".into(),
            on: Some(RevokePrivilegeFromShareOn {
                database: None,
                schema: None,
                table: None,
                view: Some(OnView {
                    name: None,
                    all_in_schema: Some(Identifier::schema("D1", "S1")),
                }),
            }),
            from: Identifier::account_object("S2"),
        };
        assert_eq!(
            validated_sql(&opts).unwrap(),
            r#"REVOKE SELECT ON ALL VIEWS IN SCHEMA "D1"."S1" FROM SHARE "S2""#
        );
    }

    #[test]
    fn revoke_rejects_multiple_targets() {
        let opts = RevokePrivilegeFromShareOptions {
            _revoke: true,
            object_privilege: "USAGE".into(),
            on: Some(RevokePrivilegeFromShareOn {
                database: Some(Identifier::account_object("D1")),
                schema: Some(Identifier::schema("D1", "S1")),
                table: None,
                view: None,
            }),
            from: Identifier::account_object("S1"),
        };
        assert!(matches!(validated_sql(&opts), Err(Error::Validation(..))));
    }

    #[test]
    fn revoke_rejects_ambiguous_view_selector() {
        let opts = RevokePrivilegeFromShareOptions {
            _revoke: true,
            object_privilege: "SELECT".into(),
            on: Some(RevokePrivilegeFromShareOn {
                database: None,
                schema: None,
                table: None,
                view: Some(OnView {
                    name: Some(Identifier::schema_object("D1", "S1", "V1")),
                    all_in_schema: Some(Identifier::schema("D1", "S1")),
                }),
            }),
            from: Identifier::account_object("S1"),
        };
        assert!(matches!(validated_sql(&opts), Err(Error::Validation(..))));
    }

    #[test]
    fn show_grants_on_object() {
        let opts = ShowGrantsOptions {
            on: Some(ShowGrantsOn {
                account: None,
                object: Some(ObjectRef {
                    object_type: "TABLE".into(),
                    name: Some(Identifier::schema_object("D1", "S1", "T1")),
                }),
            }),
            ..Default::default()
        };
        assert_eq!(
            validated_sql(&opts).unwrap(),
            r#"SHOW GRANTS ON TABLE "D1"."S1"."T1""#
        );
    }

    #[test]
    fn show_grants_to_share() {
        let opts = ShowGrantsOptions {
            to: Some(ShowGrantsTo {
                role: None,
                user: None,
                share: Some(Identifier::account_object("S1")),
            }),
            ..Default::default()
        };
        assert_eq!(validated_sql(&opts).unwrap(), r#"SHOW GRANTS TO SHARE "S1""#);
    }

    #[test]
    fn show_grants_of_share() {
        let opts = ShowGrantsOptions {
            of: Some(ShowGrantsOf {
                role: None,
                share: Some(Identifier::account_object("S1")),
            }),
            ..Default::default()
        };
        assert_eq!(validated_sql(&opts).unwrap(), r#"SHOW GRANTS OF SHARE "S1""#);
    }

    #[test]
    fn show_grants_requires_a_selector() {
        let opts = ShowGrantsOptions::default();
        let err = validated_sql(&opts).unwrap_err();
        assert!(matches!(&err, Error::Validation(..)));
        assert!(err.to_string().contains("at least one"));
    }

    #[test]
    fn show_grants_rejects_two_selectors() {
        let opts = ShowGrantsOptions {
            on: Some(ShowGrantsOn {
                account: Some(true),
                object: None,
            }),
            to: Some(ShowGrantsTo {
                role: Some(Identifier::account_object("R1")),
                user: None,
                share: None,
            }),
            ..Default::default()
        };
        assert!(matches!(validated_sql(&opts), Err(Error::Validation(..))));
    }

    #[derive(FromRow)]
    struct GrantRow {
        created_on: OffsetDateTime,
        privilege: String,
        granted_on: String,
        name: String,
        granted_to: String,
        grantee_name: String,
        grant_option: bool,
        granted_by: String,
    }

    #[derive(Debug, PartialEq)]
    struct Grant {
        created_on: OffsetDateTime,
        privilege: String,
        granted_on: String,
        name: Identifier,
        granted_to: String,
        grantee_name: Identifier,
        grant_option: bool,
        granted_by: Identifier,
    }

    impl GrantRow {
        /// Share grantees come back as `account.share`; only the share part
        /// names the grantee.
        fn into_grant(self) -> Grant {
            let grantee_name = if self.granted_to == "SHARE" {
                let name = self
                    .grantee_name
                    .split_once('.')
                    .map(|(_, rest)| rest)
                    .unwrap_or(&self.grantee_name);
                Identifier::account_object(name)
            } else {
                Identifier::account_object(&self.grantee_name)
            };
            Grant {
                created_on: self.created_on,
                privilege: self.privilege,
                granted_on: self.granted_on,
                name: Identifier::account_object(self.name.trim_matches('"')),
                granted_to: self.granted_to,
                grantee_name,
                grant_option: self.grant_option,
                granted_by: Identifier::account_object(self.granted_by),
            }
        }
    }

    fn grant_row() -> Row {
        Row::from_iter([
            ("created_on", "2024-01-15T10:30:00Z"),
            ("privilege", "USAGE"),
            ("granted_on", "DATABASE"),
            ("name", "\"D1\""),
            ("granted_to", "SHARE"),
            ("grantee_name", "ACC1.S1"),
            ("grant_option", "false"),
            ("granted_by", "ACCOUNTADMIN"),
        ])
    }

    #[test]
    fn decode_grant_rows() {
        let rows = [grant_row()];
        let grants: Vec<Grant> = decode_rows::<GrantRow>(&rows)
            .unwrap()
            .into_iter()
            .map(GrantRow::into_grant)
            .collect();
        assert_eq!(
            grants,
            vec![Grant {
                created_on: datetime!(2024-01-15 10:30:00 UTC),
                privilege: "USAGE".into(),
                granted_on: "DATABASE".into(),
                name: Identifier::account_object("D1"),
                granted_to: "SHARE".into(),
                grantee_name: Identifier::account_object("S1"),
                grant_option: false,
                granted_by: Identifier::account_object("ACCOUNTADMIN"),
            }]
        );
    }

    #[test]
    fn decode_fails_on_missing_column() {
        let mut row = Row::new();
        row.insert("privilege", "USAGE");
        assert!(matches!(
            GrantRow::from_row(&row),
            Err(Error::MissingColumn(column)) if column == "created_on"
        ));
    }
}
